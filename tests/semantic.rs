use minipas::{
    Options,
    analyze_program,
    ast::Program,
    error::{Error, SemanticError},
    interpreter::semantic::{
        core::{GLOBAL_SCOPE, RedeclarationPolicy, Resolution, SemanticAnalyzer},
        symbol::{ParamSignature, Symbol, SymbolKind},
    },
    parse_program,
};

const NESTED: &str = "
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
      a := z + k
   END;  {P2}

BEGIN {P1}
   k := a
END;  {P1}

BEGIN {Part12}
   a := 10;
END.  {Part12}
";

fn parse(src: &str) -> Program {
    parse_program(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn analyze(src: &str) -> SemanticAnalyzer {
    let mut analyzer = SemanticAnalyzer::new(RedeclarationPolicy::Overwrite);
    if let Err(e) = analyzer.analyze(&parse(src)) {
        panic!("Analysis failed: {e}");
    }
    analyzer
}

fn analysis_error(src: &str, policy: RedeclarationPolicy) -> SemanticError {
    let options = Options { redeclaration: policy,
                            ..Options::default() };
    match analyze_program(&parse(src), &options) {
        Err(Error::Semantic(e)) => e,
        other => panic!("Expected a semantic error, got {other:?}"),
    }
}

fn resolved<'a>(analyzer: &'a SemanticAnalyzer, name: &str) -> Vec<(&'a str, usize)> {
    analyzer.resolutions()
            .iter()
            .filter(|r| r.name == name)
            .map(|r| (r.scope.as_str(), r.level))
            .collect()
}

#[test]
fn inner_declarations_shadow_outer_ones() {
    let analyzer = analyze(NESTED);

    // P2's `a` and `z` are its own, `k` comes from P1.
    assert_eq!(resolved(&analyzer, "z"), [("P2", 3), ("P2", 3)]);
    assert_eq!(resolved(&analyzer, "k"), [("P1", 2), ("P1", 2)]);
    // Visiting order: P2's body, then P1's body, then the program body.
    assert_eq!(resolved(&analyzer, "a"), [("P2", 3), ("P1", 2), (GLOBAL_SCOPE, 1)]);
}

#[test]
fn resolutions_carry_use_site_lines() {
    let analyzer = analyze(NESTED);

    assert_eq!(analyzer.resolutions().last(),
               Some(&Resolution { name:  "a".to_string(),
                                  line:  23,
                                  scope: GLOBAL_SCOPE.to_string(),
                                  level: 1, }));
}

#[test]
fn one_scope_per_procedure() {
    let analyzer = analyze(NESTED);
    let scopes: Vec<(&str, usize)> = analyzer.scopes()
                                             .iter()
                                             .map(|(_, s)| (s.name.as_str(), s.level))
                                             .collect();

    assert_eq!(scopes, [(GLOBAL_SCOPE, 1), ("P1", 2), ("P2", 3)]);
}

#[test]
fn builtins_live_only_in_the_global_scope() {
    let analyzer = analyze(NESTED);
    let arena = analyzer.scopes();
    let (global, _) = arena.iter().next().unwrap();
    let (p2, _) = arena.iter().last().unwrap();

    assert_eq!(arena[global].lookup("REAL"), Some(&Symbol::builtin("REAL")));
    assert_eq!(arena[p2].lookup("INTEGER"), None);
    assert_eq!(arena.resolve(p2, "INTEGER").map(|(owner, _)| owner), Some(global));
}

#[test]
fn procedure_signatures_are_recorded() {
    let analyzer = analyze("PROGRAM T;
                            PROCEDURE Alpha(a : INTEGER; b : REAL);
                            BEGIN a := a END;
                            BEGIN END.");
    let arena = analyzer.scopes();
    let (global, _) = arena.iter().next().unwrap();

    let Some(Symbol { kind: SymbolKind::Procedure { params },
                      .. }) = arena[global].lookup("Alpha")
    else {
        panic!("Alpha was not recorded");
    };
    assert_eq!(params,
               &[ParamSignature { name:      "a".to_string(),
                                  type_name: "INTEGER".to_string(), },
                 ParamSignature { name:      "b".to_string(),
                                  type_name: "REAL".to_string(), }]);
    assert_eq!(resolved(&analyzer, "a"), [("Alpha", 2), ("Alpha", 2)]);
}

#[test]
fn undeclared_variable_is_rejected() {
    let err = analysis_error("PROGRAM T;
                              VAR a : INTEGER;
                              BEGIN
                                  c := 2 + b;
                              END.",
                             RedeclarationPolicy::Overwrite);

    assert_eq!(err,
               SemanticError::UnknownIdentifier { name: "c".to_string(),
                                                  line: 4, });
    assert!(err.to_string().contains("'c'"));
}

#[test]
fn undeclared_variable_in_expression() {
    let err = analysis_error("PROGRAM T; VAR c : INTEGER; BEGIN c := 2 + b END.",
                             RedeclarationPolicy::Overwrite);

    assert!(matches!(err, SemanticError::UnknownIdentifier { ref name, .. } if name == "b"));
}

#[test]
fn undeclared_variable_under_unary_minus() {
    let err = analysis_error("PROGRAM T; VAR c : INTEGER; BEGIN c := -(-b) END.",
                             RedeclarationPolicy::Overwrite);

    assert!(matches!(err, SemanticError::UnknownIdentifier { ref name, .. } if name == "b"));
}

#[test]
fn sibling_locals_are_invisible() {
    let err = analysis_error("PROGRAM T;
                              PROCEDURE A; VAR x : INTEGER; BEGIN x := 1 END;
                              PROCEDURE B; BEGIN x := 2 END;
                              BEGIN END.",
                             RedeclarationPolicy::Overwrite);

    assert!(matches!(err, SemanticError::UnknownIdentifier { ref name, line: 3 } if name == "x"));
}

#[test]
fn locals_do_not_leak_into_the_program_body() {
    let err = analysis_error("PROGRAM T;
                              PROCEDURE P; VAR inner : INTEGER; BEGIN END;
                              BEGIN inner := 1 END.",
                             RedeclarationPolicy::Overwrite);

    assert!(matches!(err, SemanticError::UnknownIdentifier { ref name, .. } if name == "inner"));
}

#[test]
fn redeclaration_overwrites_by_default() {
    let src = "PROGRAM T; VAR a : INTEGER; a : REAL; BEGIN a := 1 END.";
    let analyzer = analyze(src);
    let arena = analyzer.scopes();
    let (global, _) = arena.iter().next().unwrap();

    assert_eq!(arena[global].lookup("a"), Some(&Symbol::variable("a", "REAL")));
}

#[test]
fn redeclaration_can_be_rejected() {
    let err = analysis_error("PROGRAM T; VAR a : INTEGER; a : REAL; BEGIN END.",
                             RedeclarationPolicy::Reject);

    assert_eq!(err,
               SemanticError::DuplicateIdentifier { name:  "a".to_string(),
                                                    scope: GLOBAL_SCOPE.to_string(),
                                                    line:  1, });
}

#[test]
fn shadowing_is_not_a_redeclaration() {
    let options = Options { redeclaration: RedeclarationPolicy::Reject,
                            ..Options::default() };

    assert!(analyze_program(&parse(NESTED), &options).is_ok());
}

#[test]
fn analysis_is_repeatable() {
    let program = parse(NESTED);
    let mut analyzer = SemanticAnalyzer::new(RedeclarationPolicy::Overwrite);

    analyzer.analyze(&program).unwrap();
    let first = analyzer.resolutions().to_vec();
    analyzer.analyze(&program).unwrap();

    assert_eq!(analyzer.resolutions(), first.as_slice());
    assert_eq!(analyzer.scopes().len(), 3);
}

#[test]
fn scope_dump_lists_symbols_in_order() {
    let analyzer = analyze("PROGRAM T; VAR b : REAL; a : INTEGER; BEGIN END.");
    let (_, global) = analyzer.scopes().iter().next().unwrap();
    let dump = global.to_string();

    assert!(dump.starts_with("Scope name  : global\nScope level : 1"));
    let a = dump.find("<Var a: INTEGER>").unwrap();
    let b = dump.find("<Var b: REAL>").unwrap();
    assert!(a < b);
    assert!(dump.contains("<Builtin INTEGER>"));
}
