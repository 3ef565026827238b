use stoat_sat::{
    procedures::resolution::resolvents,
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

mod literals {
    use super::*;

    #[test]
    fn negation_involution() {
        let p = CLiteral::new(7, true);

        assert_ne!(p, p.negate());
        assert_eq!(p, p.negate().negate());
        assert_eq!(-p, p.negate());
    }

    #[test]
    fn order_by_atom_then_polarity() {
        assert!(CLiteral::new(1, false) < CLiteral::new(1, true));
        assert!(CLiteral::new(1, true) < CLiteral::new(2, false));
    }
}

mod clauses {
    use super::*;

    #[test]
    fn value_equality() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        assert_eq!(vec![p, q].canonical(), vec![q, p].canonical());
        assert_eq!(vec![p, p, q].canonical().size(), 2);
    }

    #[test]
    fn membership() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let clause = vec![p, -q].canonical();

        assert!(clause.contains(&p));
        assert!(clause.contains(&-q));
        assert!(!clause.contains(&q));
    }
}

mod resolution {
    use super::*;

    #[test]
    fn complementary_units_derive_the_empty_clause() {
        let p = CLiteral::new(0, true);

        let found = resolvents(&vec![p].canonical(), &vec![-p].canonical());

        assert_eq!(found.len(), 1);
        assert!(found[0].is_empty());
    }

    #[test]
    fn unit_against_pair() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let found = resolvents(&vec![p, q].canonical(), &vec![-p].canonical());

        assert_eq!(found, vec![vec![q].canonical()]);
    }

    #[test]
    fn unrelated_clauses() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let found = resolvents(&vec![p].canonical(), &vec![q].canonical());

        assert!(found.is_empty());
    }

    #[test]
    fn each_complementary_pair_contributes() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let found = resolvents(&vec![p, q].canonical(), &vec![-p, -q].canonical());

        // Both resolvents are tautologies, and the two are distinct clauses.
        assert_eq!(found.len(), 2);
        assert!(found.contains(&vec![q, -q].canonical()));
        assert!(found.contains(&vec![p, -p].canonical()));
    }

    #[test]
    fn value_equal_resolvents_collapse() {
        let p = CLiteral::new(0, true);

        let tautology = vec![p, -p].canonical();

        // Each of the two complementary pairs derives the same clause.
        let found = resolvents(&tautology, &tautology);

        assert_eq!(found, vec![tautology]);
    }

    #[test]
    fn the_empty_clause_resolves_with_nothing() {
        let p = CLiteral::new(0, true);

        assert!(resolvents(&CClause::empty(), &vec![p].canonical()).is_empty());
        assert!(resolvents(&CClause::empty(), &CClause::empty()).is_empty());
    }
}
