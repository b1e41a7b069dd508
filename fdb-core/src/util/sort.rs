use crate::entities::*;

pub trait SortByCreation {
    /// Most recently created first, ties keep their relative order.
    fn sort_by_newest_first(&mut self);
}

impl SortByCreation for [Feedback] {
    fn sort_by_newest_first(&mut self) {
        self.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdb_entities::builders::*;
    use time::macros::datetime;

    #[test]
    fn sort_newest_first() {
        let mut feedback = vec![
            Feedback::build()
                .id("old")
                .created_at(datetime!(2024-01-03 00:00 UTC).into())
                .finish(),
            Feedback::build()
                .id("new")
                .created_at(datetime!(2024-01-15 00:00 UTC).into())
                .finish(),
            Feedback::build()
                .id("mid")
                .created_at(datetime!(2024-01-08 00:00 UTC).into())
                .finish(),
        ];
        feedback.sort_by_newest_first();
        let ids: Vec<_> = feedback.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(vec!["new", "mid", "old"], ids);
    }
}
