use analyzer::ast::Expr;

pub fn parse_ok(input: &str) -> Expr {
    let lexed = analyzer::lex(input);
    analyzer::parse(&lexed).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

pub fn eval(input: &str, x: f64) -> f64 {
    crate::evaluate(&parse_ok(input), x)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
