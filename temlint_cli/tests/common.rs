use assert_cmd::Command;

pub fn temlint_cmd() -> Command {
	let mut cmd = Command::cargo_bin("temlint").expect("binary `temlint` should build");
	cmd.env("NO_COLOR", "1");
	cmd
}
