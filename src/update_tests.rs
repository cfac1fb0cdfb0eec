#[cfg(test)]
mod tests {
    use crate::args::Arg;
    use crate::{update, where_};
    use pretty_assertions::assert_eq;

    #[test]
    fn update_set_where_returning() {
        let mut ub = update("people");
        ub.set("name = ?", "bob")
            .set("visits = visits + 1", ())
            .where_("id = ?", 3_i64)
            .returning("visits", ());
        let (sql, args) = ub.build();
        assert_eq!(
            sql,
            "update people set name = $1, visits = visits + 1 where (id = $2) returning visits"
        );
        assert_eq!(args, vec![Arg::from("bob"), Arg::from(3_i64)]);
    }

    #[test]
    fn update_apply_merges_where() {
        let donor = where_("deleted_at is null", ());
        let mut ub = update("people");
        ub.set("active = ?", false).apply([&donor]);
        assert_eq!(
            ub.build().0,
            "update people set active = $1 where (deleted_at is null)"
        );
    }
}
