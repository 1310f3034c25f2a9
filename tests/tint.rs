use tint::{Number, NumberType, NumberValue, Tint, TintError};

fn run(source: &str) -> Result<Number, TintError> {
	Tint::new(false).run("<test>", source)
}

#[test]
fn evaluates_expressions_end_to_end() {
	assert!(matches!(run("1 + 2 * 3").unwrap().value, NumberValue::Int(7)));
	assert!(matches!(run("(1 + 2) * 3").unwrap().value, NumberValue::Int(9)));
	assert_eq!(run("10 / 4").unwrap().to_string(), "2.5");
	assert_eq!(run("6.0").unwrap().to_string(), "6.0");
	assert_eq!(run("2 ** 10").unwrap().to_string(), "1024");
}

#[test]
fn variables_survive_across_runs() {
	let mut tint = Tint::new(false);
	tint.run("<test>", "int x = 5").unwrap();
	tint.run("<test>", "x = x + 37").unwrap();
	let value = tint.run("<test>", "x * 2").unwrap();
	assert!(matches!(value.value, NumberValue::Int(84)));
	assert_eq!(value.r#type(), NumberType::Int);
}

#[test]
fn each_stage_reports_through_the_same_surface() {
	assert!(matches!(run("1 @ 2"), Err(TintError::Scan(_))));
	assert!(matches!(run("1 +"), Err(TintError::Parse(_))));
	assert!(matches!(run("1 / 0"), Err(TintError::Runtime(_))));
}

#[test]
fn typed_declarations_are_enforced_end_to_end() {
	let mut tint = Tint::new(false);
	tint.run("<test>", "float rate = 0.25").unwrap();
	assert!(matches!(tint.run("<test>", "float rate = 0.5"), Err(TintError::Runtime(_))));
	assert!(matches!(tint.run("<test>", "rate = 1"), Err(TintError::Runtime(_))));
	assert!(matches!(tint.run("<test>", "rate = 0.75").unwrap().value, NumberValue::Float(_)));
}

#[test]
fn integral_power_results_narrow_to_int() {
	// 2.0 ** 2 is exactly 4, so the result is an int and cannot be stored
	// back into a float variable.
	let mut tint = Tint::new(false);
	tint.run("<test>", "float y = 0.5").unwrap();
	assert!(matches!(tint.run("<test>", "y = 2.0 ** 2"), Err(TintError::Runtime(_))));
}

#[test]
fn runs_a_script_file() {
	let mut tint = Tint::new(false);
	let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("demo.tint");
	assert!(tint.run_file(&path).is_ok());
}

#[test]
fn debug_mode_does_not_change_results() {
	assert!(matches!(Tint::new(true).run("<test>", "2 ** 10").unwrap().value, NumberValue::Int(1024)));
}
