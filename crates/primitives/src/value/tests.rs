use rstest::rstest;

use super::*;

fn extracts_as(value: &Value, kind: Kind) -> bool {
	match kind {
		Kind::Bool => value.extract::<bool>().is_some(),
		Kind::Int => value.extract::<i64>().is_some(),
		Kind::Float => value.extract::<f64>().is_some(),
		Kind::Text => value.extract::<String>().is_some(),
	}
}

#[test]
fn extract_matching_kind() {
	assert_eq!(Value::from(true).extract::<bool>(), Some(true));
	assert_eq!(Value::from(42).extract::<i64>(), Some(42));
	assert_eq!(Value::from(2.75).extract::<f64>(), Some(2.75));
	assert_eq!(
		Value::from("hello").extract::<String>(),
		Some("hello".to_string())
	);
}

#[rstest]
#[case(Value::Bool(true), Kind::Int)]
#[case(Value::Bool(true), Kind::Float)]
#[case(Value::Bool(true), Kind::Text)]
#[case(Value::Int(42), Kind::Bool)]
#[case(Value::Int(42), Kind::Float)]
#[case(Value::Int(42), Kind::Text)]
#[case(Value::Float(2.75), Kind::Bool)]
#[case(Value::Float(2.75), Kind::Int)]
#[case(Value::Float(2.75), Kind::Text)]
#[case(Value::Text("hello".into()), Kind::Bool)]
#[case(Value::Text("hello".into()), Kind::Int)]
#[case(Value::Text("hello".into()), Kind::Float)]
fn extract_mismatch_is_absent(#[case] value: Value, #[case] requested: Kind) {
	assert_ne!(value.kind(), requested);
	assert!(!extracts_as(&value, requested));
}

#[test]
fn every_value_extracts_only_its_own_kind() {
	let values = [
		Value::Bool(false),
		Value::Int(0),
		Value::Float(0.0),
		Value::Text(String::new()),
	];
	for value in &values {
		for kind in Kind::ALL {
			assert_eq!(extracts_as(value, kind), value.matches_kind(kind), "{value:?} as {kind}");
		}
	}
}

#[test]
fn coercions_fall_back_to_zero_values() {
	let text = Value::from("on");
	assert!(!text.to_bool());
	assert_eq!(text.to_int(), 0);
	assert_eq!(text.to_float(), 0.0);
	assert_eq!(text.to_text(), "on");

	let int = Value::from(7);
	assert!(!int.to_bool());
	assert_eq!(int.to_int(), 7);
	assert_eq!(int.to_float(), 0.0);
	assert_eq!(int.to_text(), "");

	assert!(Value::from(true).to_bool());
	assert_eq!(Value::from(2.5).to_float(), 2.5);
}

#[test]
fn narrower_numbers_widen() {
	assert_eq!(Value::from(7u32), Value::Int(7));
	assert_eq!(Value::from(-7i32), Value::Int(-7));
	assert_eq!(Value::from(1.5f32), Value::Float(1.5));
}

#[test]
fn clones_are_independent() {
	let original = Value::from("a");
	let mut copy = original.clone();
	if let Value::Text(s) = &mut copy {
		s.push('b');
	}
	assert_eq!(original.as_str(), Some("a"));
	assert_eq!(copy.as_str(), Some("ab"));
}

#[test]
fn display() {
	assert_eq!(Value::from(true).to_string(), "true");
	assert_eq!(Value::from(-3).to_string(), "-3");
	assert_eq!(Value::from(30.5).to_string(), "30.5");
	assert_eq!(Value::from("https://api.example.com").to_string(), "https://api.example.com");
	assert_eq!(Kind::Float.to_string(), "float");
	assert_eq!(Value::from("x").type_name(), "text");
}

#[test]
fn from_value_kind_constants() {
	assert_eq!(<bool as FromValue>::KIND, Kind::Bool);
	assert_eq!(<i64 as FromValue>::KIND, Kind::Int);
	assert_eq!(<f64 as FromValue>::KIND, Kind::Float);
	assert_eq!(<String as FromValue>::KIND, Kind::Text);
}
