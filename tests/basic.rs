use stoat_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {
    use super::*;
    use stoat_sat::structures::literal::{CLiteral, Literal};

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.named_atom("p").unwrap();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(CLiteral::new(p, true)));

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn complementary_units() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.named_atom("p").unwrap();

        assert!(ctx.add_clause(CLiteral::new(p, true)).is_ok());
        assert!(ctx.add_clause(CLiteral::new(p, false)).is_ok());

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Unsatisfiable)
    }

    #[test]
    fn unit_against_pair() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.named_atom("p").unwrap();
        let q = ctx.named_atom("q").unwrap();

        let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
        assert!(ctx.add_clause(p_q_clause).is_ok());
        assert!(ctx.add_clause(CLiteral::new(p, false)).is_ok());

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn units_against_pair() {
        let mut ctx = Context::from_config(Config::default());

        for string in ["p", "q", "¬p ¬q"] {
            let clause = ctx.clause_from_string(string).unwrap();
            assert!(ctx.add_clause(clause).is_ok());
        }

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Unsatisfiable)
    }

    #[test]
    fn chain_contradiction() {
        let mut ctx = Context::from_config(Config::default());

        for string in ["A", "¬A B", "¬B C", "¬C ¬A"] {
            let clause = ctx.clause_from_string(string).unwrap();
            assert!(ctx.add_clause(clause).is_ok());
        }

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Unsatisfiable)
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(Vec::<CLiteral>::new()));

        // The empty clause settles the formula without a solve…
        assert_eq!(ctx.report(), Report::Unsatisfiable);

        // …and a solve has nothing to add.
        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
        assert_eq!(ctx.counters.fresh_steps, 0);
    }

    #[test]
    fn duplicate_clauses() {
        let mut ctx = Context::from_config(Config::default());

        let clause = ctx.clause_from_string("p q").unwrap();
        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(clause));

        let clause = ctx.clause_from_string("q p").unwrap();
        assert_eq!(Ok(ClauseOk::Duplicate), ctx.add_clause(clause));

        assert_eq!(ctx.clause_db.len(), 1);
    }

    #[test]
    fn duplicate_literals() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.named_atom("p").unwrap();
        let q = ctx.named_atom("q").unwrap();

        let clause = vec![
            CLiteral::new(p, true),
            CLiteral::new(p, true),
            CLiteral::new(q, true),
            CLiteral::new(q, true),
        ];
        assert!(ctx.add_clause(clause).is_ok());

        let the_clause = ctx.clause_db.iter().next().unwrap();
        assert_eq!(the_clause.size(), 2);
    }

    #[test]
    fn tautology_kept() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.named_atom("p").unwrap();

        let clause = vec![CLiteral::new(p, true), CLiteral::new(p, false)];
        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(clause));

        assert_eq!(ctx.clause_db.len(), 1);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);

        // A lone clause makes no pairs --- in particular, the tautology is not resolved against itself.
        assert_eq!(ctx.counters.fresh_steps, 0);
    }
}

mod parsing {
    use super::*;
    use stoat_sat::structures::literal::Literal;
    use stoat_sat::types::err::{ErrorKind, ParseError};

    #[test]
    fn negation_markers() {
        let mut ctx = Context::from_config(Config::default());

        let clause = ctx.clause_from_string("A ¬B !C -D").unwrap();

        assert_eq!(clause.len(), 4);
        assert!(clause[0].polarity());
        assert!(!clause[1].polarity());
        assert!(!clause[2].polarity());
        assert!(!clause[3].polarity());
    }

    #[test]
    fn marker_variants_agree() {
        let mut ctx = Context::from_config(Config::default());

        let neg_sign = ctx.literal_from_string("¬A").unwrap();
        let minus = ctx.literal_from_string("-A").unwrap();
        let bang = ctx.literal_from_string("!A").unwrap();

        assert_eq!(neg_sign, minus);
        assert_eq!(minus, bang);
    }

    #[test]
    fn bad_tokens() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.literal_from_string(""),
            Err(ErrorKind::Parse(ParseError::Empty))
        );
        assert_eq!(
            ctx.literal_from_string("¬"),
            Err(ErrorKind::Parse(ParseError::Negation))
        );
        assert_eq!(
            ctx.literal_from_string("--A"),
            Err(ErrorKind::Parse(ParseError::Negation))
        );
        assert_eq!(
            ctx.clause_from_string("   "),
            Err(ErrorKind::Parse(ParseError::Empty))
        );
    }

    #[test]
    fn dimacs_formula() {
        let mut ctx = Context::from_config(Config::default());

        let dimacs = "
p cnf 2 4
 1  2 0
-1  2 0
-1 -2 0
 1 -2 0
";

        let info = ctx.read_dimacs(dimacs.as_bytes()).unwrap();

        assert_eq!(info.expected_atom_count, Some(2));
        assert_eq!(info.expected_clause_count, Some(4));
        assert_eq!(info.added_clauses, 4);
        assert_eq!(ctx.clause_db.len(), 4);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn dimacs_comments_and_terminator() {
        let mut ctx = Context::from_config(Config::default());

        let dimacs = "
c a comment
p cnf 2 2
1 2 0
c another comment
-1 0
%
1 0
";

        let info = ctx.read_dimacs(dimacs.as_bytes()).unwrap();

        // The clause after the `%` terminator is not read.
        assert_eq!(info.added_clauses, 2);

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);
    }
}
