use super::*;

/// Helper to capture what a Greeter writes through the output seam
fn announce_to_bytes(greeter: &Greeter) -> Vec<u8> {
    let mut out = Vec::new();
    greeter.write_to(&mut out).unwrap();
    out
}

#[test]
fn test_announce_hello_world() {
    let greeter = Greeter::new("Hello, World!");
    assert_eq!(announce_to_bytes(&greeter), b"Hello, World!\n");
}

#[test]
fn test_announce_empty_message() {
    let greeter = Greeter::new("");
    assert_eq!(announce_to_bytes(&greeter), b"\n");
}

#[test]
fn test_announce_preserves_embedded_newlines() {
    let greeter = Greeter::new("line1\nline2");
    assert_eq!(announce_to_bytes(&greeter), b"line1\nline2\n");
}

#[test]
fn test_two_greeters_announce_in_call_order() {
    let first = Greeter::new("first");
    let second = Greeter::new("second");

    let mut out = Vec::new();
    first.write_to(&mut out).unwrap();
    second.write_to(&mut out).unwrap();

    assert_eq!(out, b"first\nsecond\n");
}

#[test]
fn test_repeated_announce_is_identical() {
    let greeter = Greeter::new("again");

    let once = announce_to_bytes(&greeter);
    let twice = announce_to_bytes(&greeter);

    assert_eq!(once, twice);
    assert_eq!(once, b"again\n");
}

#[test]
fn test_announce_to_stdout_does_not_panic() {
    let greeter = Greeter::new("Hello, World!");
    greeter.announce();
    greeter.announce();
}

#[test]
fn test_message_stored_verbatim() {
    let input = "  spaced  \t and 日本語 🦀  ";
    let greeter = Greeter::new(input);

    assert_eq!(greeter.message(), input);

    let mut expected = input.as_bytes().to_vec();
    expected.push(b'\n');
    assert_eq!(announce_to_bytes(&greeter), expected);
}
