use super::*;

fn check(name: &str) -> Result<(), String> {
    ValidWindowsFilename
        .check(name, &EntryInfo::file(name, 1))
        .map_err(|v| v.message().to_string())
}

#[test]
fn accepts_ordinary_names() {
    for name in ["hello.txt", "CONSOLE.txt", "com10", "lpt.txt", "xCON"] {
        assert!(check(name).is_ok(), "{name}");
    }
}

#[test]
fn rejects_reserved_names_with_or_without_extension() {
    for name in ["CON", "CON.txt", "con.txt", "LpT7.foobar", "nul", "Aux.tar.gz"] {
        assert_eq!(
            check(name),
            Err("uses a reserved file name".to_string()),
            "{name}"
        );
    }
}

#[test]
fn lists_reserved_characters_in_table_order() {
    assert_eq!(
        check("t:est.txt"),
        Err("contains invalid characters: :".to_string())
    );
    assert_eq!(
        check("a*b<c>.txt"),
        Err("contains invalid characters: < > *".to_string())
    );
    assert_eq!(
        check("quote\".txt"),
        Err("contains invalid characters: \"".to_string())
    );
}

#[test]
fn rejects_trailing_space_and_period() {
    assert_eq!(check("hello."), Err("has a trailing period".to_string()));
    assert_eq!(check("hello.txt "), Err("has a trailing space".to_string()));
}

#[test]
fn reserved_characters_win_over_later_checks() {
    assert_eq!(
        check("CON|."),
        Err("contains invalid characters: |".to_string())
    );
}
