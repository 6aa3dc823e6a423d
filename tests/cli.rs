use assert_cmd::Command;
use predicates::prelude::*;

const PROMPT: &str = "Please input operation (encode/decode/exit):";

fn chucknorris() -> Command {
    let mut cmd = Command::cargo_bin("chucknorris").unwrap();
    cmd.env_remove("CHUCKNORRIS_LOG");
    cmd
}

#[test]
fn test_session_transcript() {
    let expected = format!(
        "{PROMPT}\n\
         Input string:\n\
         Encoded string:\n\
         0 0 00 0000 0 00\n\
         \n\
         {PROMPT}\n\
         Input encoded string:\n\
         Decoded string:\n\
         CC\n\
         \n\
         {PROMPT}\n\
         Input encoded string:\n\
         Encoded string is not valid\n\
         \n\
         {PROMPT}\n\
         There is no 'hello' operation\n\
         \n\
         {PROMPT}\n\
         Bye\n"
    );

    chucknorris()
        .write_stdin("encode\nC\ndecode\n0 0 00 0000 0 000 00 0000 0 00\ndecode\n0 00\nhello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_session_ends_at_eof() {
    chucknorris()
        .write_stdin("encode\n~\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 000000 00 0"))
        .stdout(predicate::str::ends_with("Bye\n"));
}

#[test]
fn test_encode_subcommand() {
    chucknorris()
        .args(["encode", "CC"])
        .assert()
        .success()
        .stdout("0 0 00 0000 0 000 00 0000 0 00\n");
}

#[test]
fn test_decode_subcommand() {
    chucknorris()
        .args(["decode", "0 0 00 0000 0 00"])
        .assert()
        .success()
        .stdout("C\n");
}

#[test]
fn test_decode_subcommand_invalid() {
    chucknorris()
        .args(["decode", "000 0 00 0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            "Error: encoded string is not valid: block 0: marker \"000\" is not \"0\" or \"00\"\n",
        );
}

#[test]
fn test_encode_subcommand_unsupported() {
    chucknorris()
        .args(["encode", "café"])
        .assert()
        .failure()
        .stderr(
            "Error: cannot encode: unsupported character 'é' at position 3 (code must be 0-127)\n",
        );
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    chucknorris()
        .args(["-v", "decode", "0 00"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rejected encoded line"));
}

#[test]
fn test_log_filter_from_env() {
    chucknorris()
        .env("CHUCKNORRIS_LOG", "trace")
        .args(["encode", "C"])
        .assert()
        .success()
        .stdout("0 0 00 0000 0 00\n")
        .stderr(predicate::str::contains("encoded text"));
}

#[test]
fn test_version() {
    chucknorris()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
