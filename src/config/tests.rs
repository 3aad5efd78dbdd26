use super::*;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("pattern-pages")
        .chain(list.iter().copied())
        .map(str::to_string)
        .collect()
}

fn build(fs: MockFilesystem, list: &[&str]) -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(fs.boxed(), &MockConsole::new().get(), args(list))
}

#[test]
fn defaults_run_every_page() {
    let conf = build(MockFilesystem::new(), &[]).unwrap();
    assert!(!conf.happy_exit);
    assert_eq!(conf.pages, PageKind::ALL.to_vec());
    assert_eq!(conf.observer_pause, Some(Duration::from_secs(2)));
    assert_eq!(
        conf.blocked_urls,
        vec!["twitter.com", "google.com", "facebook.com"]
    );
    assert_eq!(conf.letter_case, LetterCase::Both);
}

#[test]
fn can_select_pages_on_command_line() {
    let conf = build(MockFilesystem::new(), &["--pages", "observer,proxy"]).unwrap();
    assert_eq!(conf.pages, vec![PageKind::Observer, PageKind::Proxy]);
}

#[test]
fn unknown_page_errors() {
    let err = build(MockFilesystem::new(), &["--pages", "bridge"]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("pages"));
    assert!(message.contains("bridge"));
}

#[test]
fn can_config_pause_in_toml() {
    let fs = MockFilesystem::new().add_file(DEFAULT_TOML_PATH, "observer_pause = 0.5");
    let conf = build(fs, &[]).unwrap();
    assert_eq!(conf.observer_pause, Some(Duration::from_millis(500)));
}

#[test]
fn can_config_pause_with_int() {
    let fs = MockFilesystem::new().add_file(DEFAULT_TOML_PATH, "observer_pause = 3");
    let conf = build(fs, &[]).unwrap();
    assert_eq!(conf.observer_pause, Some(Duration::from_secs(3)));
}

#[test]
fn zero_pause_disables_waiting() {
    let conf = build(MockFilesystem::new(), &["--observer-pause", "0"]).unwrap();
    assert_eq!(conf.observer_pause, None);
}

#[test]
fn negative_pause_errors() {
    let fs = MockFilesystem::new().add_file(DEFAULT_TOML_PATH, "observer_pause = -1.0");
    let err = build(fs, &[]).unwrap_err();
    assert!(err.to_string().contains("non-negative"));
}

#[test]
fn command_line_overrides_toml() {
    let fs = MockFilesystem::new().add_file(DEFAULT_TOML_PATH, "pages = \"adapter\"");
    let conf = build(fs, &["--pages", "visitor"]).unwrap();
    assert_eq!(conf.pages, vec![PageKind::Visitor]);
}

#[test]
fn blocked_urls_can_be_a_toml_list() {
    let fs = MockFilesystem::new().add_file(
        DEFAULT_TOML_PATH,
        "blocked_urls = [\"example.com\", \"rust-lang.org\"]",
    );
    let conf = build(fs, &[]).unwrap();
    assert_eq!(conf.blocked_urls, vec!["example.com", "rust-lang.org"]);
}

#[test]
fn empty_blocked_urls_blocks_nothing() {
    let conf = build(MockFilesystem::new(), &["--blocked-urls", ""]).unwrap();
    assert!(conf.blocked_urls.is_empty());
}

#[test]
fn can_pick_letter_case() {
    let conf = build(MockFilesystem::new(), &["--letter-case", "lower"]).unwrap();
    assert_eq!(conf.letter_case, LetterCase::Lower);
}

#[test]
fn invalid_letter_case_errors() {
    let err = build(MockFilesystem::new(), &["--letter-case", "title"]).unwrap_err();
    assert!(err.to_string().contains("upper"));
}

#[test]
fn unknown_toml_option_errors() {
    let fs = MockFilesystem::new().add_file(DEFAULT_TOML_PATH, "max_game_time = 5");
    let err = build(fs, &[]).unwrap_err();
    assert!(err.to_string().contains(DEFAULT_TOML_PATH));
}

#[test]
fn wrong_toml_type_errors() {
    let fs = MockFilesystem::new().add_file(DEFAULT_TOML_PATH, "help = \"yes\"");
    assert!(build(fs, &[]).is_err());
}

#[test]
fn unknown_argument_errors() {
    assert!(build(MockFilesystem::new(), &["--verbose"]).is_err());
}

#[test]
fn float_argument_needs_value() {
    assert!(build(MockFilesystem::new(), &["--observer-pause"]).is_err());
}

#[test]
fn multiple_values_error() {
    assert!(build(MockFilesystem::new(), &["--pages", "observer", "proxy"]).is_err());
}

#[test]
fn help_prints_every_option_and_exits() {
    let console = MockConsole::new();
    let conf = build_config_with(
        MockFilesystem::new().boxed(),
        &console.get(),
        args(&["--help"]),
    )
    .unwrap();
    assert!(conf.happy_exit);
    let text = console.lines().join("\n");
    for entry in config_entries() {
        assert!(text.contains(&format!("--{}", entry.name().replace('_', "-"))));
    }
}

#[test]
fn nothing_printed_without_help() {
    let console = MockConsole::new();
    build_config_with(MockFilesystem::new().boxed(), &console.get(), args(&[])).unwrap();
    assert!(console.lines().is_empty());
}

#[test]
#[should_panic]
fn duplicate_entries_panic() {
    let mut entries = config_entries();
    entries.extend(config_entries());
    ConfigBuilder::new(entries);
}
