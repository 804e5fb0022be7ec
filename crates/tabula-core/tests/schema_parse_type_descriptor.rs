use tabula_core::parse_type_descriptor;

#[test]
fn parse_simple_type() {
    assert_eq!(parse_type_descriptor("string"), ("string".to_string(), ""));
}

#[test]
fn parse_lowercases_simple_type() {
    assert_eq!(parse_type_descriptor("BigInt"), ("bigint".to_string(), ""));
}

#[test]
fn parse_complex_type() {
    assert_eq!(
        parse_type_descriptor("array<string>"),
        ("array".to_string(), "string")
    );
}

#[test]
fn parse_keeps_content_case() {
    assert_eq!(
        parse_type_descriptor("STRUCT<personFamilyName:STRING>"),
        ("struct".to_string(), "personFamilyName:STRING")
    );
}

#[test]
fn parse_very_complex_type_without_closing_bracket() {
    let type_str = "struct<name:string,code:string,contacts:array<struct<personFamilyName:string,personGivenName:string,personRoles:array<string>,personTitle:string,col3:array<string>>>,score:int";
    let expected_content = "name:string,code:string,contacts:array<struct<personFamilyName:string,personGivenName:string,personRoles:array<string>,personTitle:string,col3:array<string>>>,score:int";

    assert_eq!(
        parse_type_descriptor(type_str),
        ("struct".to_string(), expected_content)
    );
}

#[test]
fn parse_strips_only_one_closing_bracket() {
    assert_eq!(
        parse_type_descriptor("array<array<int>>"),
        ("array".to_string(), "array<int>")
    );
}
