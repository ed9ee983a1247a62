use minipas::{
    ast::{BinaryOperator, Compound, Declaration, Expr, LiteralValue, Program, Statement, UnaryOperator},
    error::{Error, ParseError},
    interpreter::lexer::TokenKind,
    parse_program,
};

const PART12: &str = "
PROGRAM Part12;
VAR
   a : INTEGER;

PROCEDURE P1;
VAR
   a : REAL;
   k : INTEGER;

   PROCEDURE P2;
   VAR
      a, z : INTEGER;
   BEGIN {P2}
      z := 777;
   END;  {P2}

BEGIN {P1}

END;  {P1}

BEGIN {Part12}
   a := 10;
END.  {Part12}
";

fn parse(src: &str) -> Program {
    parse_program(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn parse_error(src: &str) -> ParseError {
    match parse_program(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

/// Parses `expr` as the right-hand side of an assignment.
fn parse_expr(expr: &str) -> Expr {
    let program = parse(&format!("PROGRAM T; BEGIN x := {expr} END."));
    match program.block.body.statements.into_iter().next() {
        Some(Statement::Assign(assign)) => assign.value,
        other => panic!("Expected an assignment, got {other:?}"),
    }
}

fn literal(n: i64) -> Box<Expr> {
    Box::new(Expr::Literal { value: LiteralValue::Integer(n),
                             line:  1, })
}

#[test]
fn nested_procedures_tree() {
    let program = parse(PART12);
    assert_eq!(program.name, "Part12");

    let [Declaration::Variable(a), Declaration::Procedure(p1)] =
        program.block.declarations.as_slice()
    else {
        panic!("Unexpected top-level declarations: {:?}", program.block.declarations);
    };
    assert_eq!(a.variable.name, "a");
    assert_eq!(a.type_spec.name, "INTEGER");

    assert_eq!(p1.name, "P1");
    assert!(p1.params.is_empty());
    let names: Vec<&str> = p1.block
                             .declarations
                             .iter()
                             .map(|d| match d {
                                 Declaration::Variable(v) => v.variable.name.as_str(),
                                 Declaration::Procedure(p) => p.name.as_str(),
                             })
                             .collect();
    assert_eq!(names, ["a", "k", "P2"]);
    assert_eq!(p1.block.body.statements, [Statement::NoOp]);

    let Some(Declaration::Procedure(p2)) = p1.block.declarations.last() else {
        panic!("P2 missing");
    };
    assert_eq!(p2.block.declarations.len(), 2);
    assert_eq!(p2.block.body.statements.len(), 2);
    assert_eq!(p2.block.body.statements[1], Statement::NoOp);

    // `a := 10;` followed by the empty statement before END.
    let top = &program.block.body.statements;
    assert_eq!(top.len(), 2);
    let Statement::Assign(assign) = &top[0] else {
        panic!("Expected an assignment, got {:?}", top[0]);
    };
    assert_eq!(assign.target.name, "a");
    assert_eq!(assign.value,
               Expr::Literal { value: LiteralValue::Integer(10),
                               line:  22, });
}

#[test]
fn multiple_names_share_one_type() {
    let program = parse("PROGRAM T; VAR a, b, c : REAL; d : INTEGER; BEGIN END.");

    let types: Vec<(&str, &str)> =
        program.block
               .declarations
               .iter()
               .filter_map(|d| match d {
                   Declaration::Variable(v) => {
                       Some((v.variable.name.as_str(), v.type_spec.name.as_str()))
                   },
                   Declaration::Procedure(_) => None,
               })
               .collect();

    assert_eq!(types, [("a", "REAL"), ("b", "REAL"), ("c", "REAL"), ("d", "INTEGER")]);
}

#[test]
fn procedure_parameters() {
    let program = parse("PROGRAM T;
                         PROCEDURE Alpha(a, b : INTEGER; c : REAL);
                         BEGIN END;
                         BEGIN END.");

    let Some(Declaration::Procedure(alpha)) = program.block.declarations.first() else {
        panic!("Alpha missing");
    };
    let params: Vec<(&str, &str)> =
        alpha.params
             .iter()
             .map(|p| (p.variable.name.as_str(), p.type_spec.name.as_str()))
             .collect();

    assert_eq!(params, [("a", "INTEGER"), ("b", "INTEGER"), ("c", "REAL")]);
    assert_eq!(alpha.line, 2);
}

#[test]
fn binary_operators_are_left_associative() {
    let expected = Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  literal(8),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: literal(3),
                                                                     line:  1, }),
                                    op:    BinaryOperator::Sub,
                                    right: literal(2),
                                    line:  1, };

    assert_eq!(parse_expr("8 - 3 - 2"), expected);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::BinaryOp { left, op, right, .. } = parse_expr("1 + 2 * 3") else {
        panic!("Expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(left, literal(1));
    assert!(matches!(*right,
                     Expr::BinaryOp { op: BinaryOperator::Mul,
                                      .. }));
}

#[test]
fn parentheses_override_precedence() {
    let Expr::BinaryOp { left, op, .. } = parse_expr("(1 + 2) DIV 3") else {
        panic!("Expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::IntegerDiv);
    assert!(matches!(*left,
                     Expr::BinaryOp { op: BinaryOperator::Add,
                                      .. }));
}

#[test]
fn repeated_unary_operators_nest() {
    let expected = Expr::UnaryOp { op:   UnaryOperator::Minus,
                                   expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Minus,
                                                                  expr: literal(5),
                                                                  line: 1, }),
                                   line: 1, };

    assert_eq!(parse_expr("- - 5"), expected);
    assert!(matches!(parse_expr("+a"),
                     Expr::UnaryOp { op: UnaryOperator::Plus,
                                     .. }));
}

#[test]
fn real_literals_keep_their_kind() {
    assert_eq!(parse_expr("2.75"),
               Expr::Literal { value: LiteralValue::Real(2.75),
                               line:  1, });
}

#[test]
fn nested_compound_statements() {
    let program = parse("PROGRAM T; BEGIN BEGIN END; BEGIN x := 1 END END.");

    let statements = &program.block.body.statements;
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0],
               Statement::Compound(Compound { statements: vec![Statement::NoOp] }));
    assert!(matches!(&statements[1], Statement::Compound(inner) if inner.statements.len() == 1));
}

#[test]
fn missing_semicolon_is_reported_with_context() {
    let err = parse_error("PROGRAM T; VAR a : INTEGER; BEGIN a := 1 a := 2 END.");

    let ParseError::UnexpectedToken { expected,
                                      found,
                                      recent,
                                      line, } = &err
    else {
        panic!("Expected UnexpectedToken, got {err:?}");
    };
    assert_eq!(*expected, TokenKind::End);
    assert_eq!(found.kind, TokenKind::Id);
    assert_eq!(found.text(), "a");
    assert_eq!(*line, 1);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent.last().map(|t| t.text()), Some("1"));

    let message = err.to_string();
    assert!(message.contains("Expected END"), "{message}");
    assert!(message.contains("Token(ID, 'a')"), "{message}");
}

#[test]
fn missing_final_dot() {
    let err = parse_error("PROGRAM T; BEGIN END");

    assert!(matches!(err,
                     ParseError::UnexpectedToken { expected: TokenKind::Dot,
                                                   .. }));
}

#[test]
fn tokens_after_the_final_dot() {
    let err = parse_error("PROGRAM T; BEGIN END. x");

    assert!(matches!(err, ParseError::UnexpectedTrailingTokens { ref token, .. } if token.text() == "x"));
}

#[test]
fn unknown_type_keyword() {
    let err = parse_error("PROGRAM T; VAR a : BOOLEAN; BEGIN END.");

    assert!(matches!(err, ParseError::InvalidTypeSpec { ref found, .. } if found.text() == "BOOLEAN"));
}

#[test]
fn var_section_needs_a_declaration() {
    assert!(matches!(parse_error("PROGRAM T; VAR BEGIN END."),
                     ParseError::UnexpectedToken { expected: TokenKind::Id,
                                                   .. }));
}

#[test]
fn integer_literal_out_of_range() {
    let err = parse_error("PROGRAM T; BEGIN x := 99999999999999999999 END.");

    assert!(matches!(err, ParseError::LiteralTooLarge { ref literal, .. } if literal == "99999999999999999999"));
}

#[test]
fn lexical_errors_surface_as_lex_errors() {
    assert!(matches!(parse_program("PROGRAM T; BEGIN x := 1 ? 2 END."), Err(Error::Lex(_))));
}

#[test]
fn empty_statement_list() {
    let program = parse("PROGRAM T; BEGIN END.");

    assert_eq!(program.block.body.statements, [Statement::NoOp]);
    assert!(program.block.declarations.is_empty());
}
