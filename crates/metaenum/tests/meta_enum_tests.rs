//! Tests for enums declared with `meta_enum!`

use metaenum::{
    INVALID_ENUM_NAME, MetaEnum, MetaEnumRange, ParseEnumError, enum_from_repr, enum_to_index,
    enum_to_string, meta_enum, string_to_enum, string_to_enum_or,
};

metaenum::meta_enum! {
    #[derive(Debug)]
    enum MyTestEnum: i32 { ONE, TWO, THREE }
}

mod nested {
    metaenum::meta_enum! {
        #[derive(Debug)]
        pub enum MyTestEnum: i32 { ONE, TWO, THREE, }
    }
}

metaenum::meta_enum! {
    #[derive(Debug, Hash, PartialOrd, Ord)]
    pub enum Nested: u8 {
        THREE = 3,
        ONE = 1,
        TWO,
        FOUR = 5,
    }
}

metaenum::meta_enum! {
    #[derive(Debug)]
    enum EnumWithComments: i32 {
        /// This is the first enum in the list
        ONE,
        /// This is the second enum in the list, with a comma
        TWO,
        THREE // trailing comments vanish with the tokens
    }
}

const fn pick(a: i64, b: i64) -> i64 {
    if a > b { a } else { b }
}

metaenum::meta_enum! {
    #[derive(Debug)]
    enum WithExpressions: i64 {
        Shifted = 1 << 4,
        Called = pick(40, 2),
        Next,
        Negative = -(3 >> 1),
        Last,
    }
}

metaenum::meta_enum! {
    #[derive(Debug)]
    #[allow(non_camel_case_types)]
    enum Keyword: u8 {
        r#type,
        r#match = 4,
        plain,
    }
}

metaenum::meta_enum! {
    #[derive(Debug)]
    enum Drink: u8 {
        Café,
        Thé = 4,
    }
}

#[test]
fn test_string_mapper() {
    assert_eq!(enum_to_string(MyTestEnum::ONE), "ONE");
    assert_eq!(enum_to_string(MyTestEnum::TWO), "TWO");
    assert_eq!(enum_to_string(MyTestEnum::THREE), "THREE");

    assert_eq!(string_to_enum::<MyTestEnum>("ONE"), Some(MyTestEnum::ONE));
    assert_eq!(string_to_enum::<MyTestEnum>("TWO"), Some(MyTestEnum::TWO));
    assert_eq!(string_to_enum::<MyTestEnum>("THREE"), Some(MyTestEnum::THREE));
}

#[test]
fn test_unknown_names() {
    assert_eq!(string_to_enum::<MyTestEnum>("FOUR"), None);
    assert_eq!(string_to_enum::<MyTestEnum>("one"), None);
    assert_eq!(string_to_enum::<MyTestEnum>(""), None);
    assert_eq!(
        string_to_enum_or::<MyTestEnum>("FOUR", MyTestEnum::TWO),
        MyTestEnum::TWO
    );
    assert_eq!(
        "FOUR".parse::<MyTestEnum>(),
        Err(ParseEnumError {
            enum_name: "MyTestEnum",
            input: "FOUR".to_string(),
        })
    );
}

#[test]
fn test_meta_enum_sizes() {
    assert_eq!(meta_enum::<MyTestEnum>().size(), 3);
    assert_eq!(meta_enum::<nested::MyTestEnum>().size(), 3);
    assert_eq!(meta_enum::<Nested>().size(), 4);
    assert_eq!(meta_enum::<MyTestEnum>().members()[1].value, MyTestEnum::TWO);
}

#[test]
fn test_same_name_in_other_module_is_separate() {
    let outer = meta_enum::<MyTestEnum>();
    let inner = meta_enum::<nested::MyTestEnum>();
    assert_eq!(inner.value_of("TWO"), Some(nested::MyTestEnum::TWO));
    assert!(outer.string().starts_with("ONE"));
    assert!(outer.string().ends_with("THREE"));
}

#[test]
fn test_resolved_values_match_discriminants() {
    let table = Nested::meta_enum();
    let raw: Vec<u8> = table.values().map(|v| v as u8).collect();
    assert_eq!(raw, vec![3, 1, 2, 5]);
    assert_eq!(Nested::TWO.to_repr(), 2);
    assert_eq!(enum_from_repr::<Nested>(5), Some(Nested::FOUR));
    assert_eq!(enum_from_repr::<Nested>(4), None);
}

#[test]
fn test_indices() {
    assert_eq!(enum_to_index(Nested::THREE), 0);
    assert_eq!(enum_to_index(Nested::FOUR), 3);
    assert_eq!(enum_to_index(MyTestEnum::THREE), 2);
}

#[test]
fn test_iteration() {
    let range = MetaEnumRange::<MyTestEnum>::new();
    let mut count = 0;
    for e in range {
        count += 1;
        assert_ne!(enum_to_string(e), INVALID_ENUM_NAME);
    }
    assert_eq!(count, 3);
    assert_eq!(range.len(), 3);
    assert!(!range.is_empty());
}

#[test]
fn test_random_access_and_reverse() {
    let range = MetaEnumRange::<Nested>::new();
    assert_eq!(range.get(0), Some(Nested::THREE));
    assert_eq!(range.get(1), Some(Nested::ONE));
    assert_eq!(range.get(2), Some(Nested::TWO));
    assert_eq!(range.get(3), Some(Nested::FOUR));
    assert_eq!(range.get(4), None);

    let reversed: Vec<_> = range.iter().rev().collect();
    assert_eq!(
        reversed,
        vec![Nested::FOUR, Nested::TWO, Nested::ONE, Nested::THREE]
    );
}

#[test]
fn test_iterate_from_value() {
    let range = MetaEnumRange::<MyTestEnum>::new();
    let mut it = range.iter_from(MyTestEnum::ONE);
    assert_eq!(it.next(), Some(MyTestEnum::ONE));
    assert_eq!(it.next(), Some(MyTestEnum::TWO));

    let tail: Vec<_> = range.iter_from(MyTestEnum::THREE).collect();
    assert_eq!(tail, vec![MyTestEnum::THREE]);

    let all: Vec<_> = MetaEnumRange::<Nested>::new().iter_from(Nested::THREE).collect();
    assert_eq!(all.len(), 4);
}

#[test]
fn test_enum_with_comments() {
    assert_eq!(enum_to_string(EnumWithComments::ONE), "ONE");
    assert_eq!(enum_to_string(EnumWithComments::TWO), "TWO");
    assert_eq!(enum_to_string(EnumWithComments::THREE), "THREE");
    let table = EnumWithComments::meta_enum();
    assert!(table.members()[1].string.contains("with a comma"));
}

#[test]
fn test_initializer_expressions_are_not_evaluated_by_the_table() {
    let table = WithExpressions::meta_enum();
    let names: Vec<_> = table.members().iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Shifted", "Called", "Next", "Negative", "Last"]);
    assert_eq!(WithExpressions::Shifted as i64, 16);
    assert_eq!(WithExpressions::Next as i64, 41);
    assert_eq!(WithExpressions::Last as i64, 0);
    assert_eq!(string_to_enum::<WithExpressions>("Next"), Some(WithExpressions::Next));
}

#[test]
fn test_display_and_from_str() {
    assert_eq!(Nested::FOUR.to_string(), "FOUR");
    assert_eq!(format!("{}", MyTestEnum::TWO), "TWO");
    assert_eq!("ONE".parse::<Nested>(), Ok(Nested::ONE));
}

#[test]
fn test_table_is_shared() {
    let first = MyTestEnum::meta_enum() as *const _;
    let second = meta_enum::<MyTestEnum>() as *const _;
    assert_eq!(first, second);
}

#[test]
fn test_raw_identifiers_use_bare_names() {
    assert_eq!(enum_to_string(Keyword::r#type), "type");
    assert_eq!(enum_to_string(Keyword::r#match), "match");
    assert_eq!("match".parse::<Keyword>(), Ok(Keyword::r#match));
    assert_eq!(string_to_enum::<Keyword>("plain"), Some(Keyword::plain));
    assert_eq!(Keyword::plain as u8, 5);
}

#[test]
#[should_panic(expected = "member 0 is declared as `Café` but reads as `Caf`")]
fn test_non_ascii_names_are_rejected() {
    let _ = enum_to_string(Drink::Café);
}
