use super::*;

/// These entries will be applied in order of returned vec (NOT in the order the user specifies the entry). All entries
/// will always be applied.
pub fn config_entries() -> Vec<Box<dyn ConfigEntry>> {
    vec![
        <dyn ConfigEntry>::new_bool(
            "help",
            "show this help and exit",
            false,
            |conf, help, _| {
                conf.happy_exit = help;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_string(
            "pages",
            concat!(
                "comma separated pages to run in order, or all to run every page. pages are: ",
                "adapter, facade, observer, proxy, singleton, strategy, visitor"
            ),
            "all",
            |conf, pages, source| {
                conf.pages = PageKind::parse_list(&pages)
                    .map_err(|e| format!("{} {}", describe_source(source), e))?;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_float(
            "observer_pause",
            "seconds the observer page waits between traffic light changes, or 0 to not wait",
            2.0,
            |conf, seconds, source| {
                if !seconds.is_finite() || seconds < 0.0 {
                    Err(format!(
                        "{} should be a non-negative number of seconds",
                        describe_source(source)
                    )
                    .into())
                } else if seconds == 0.0 {
                    conf.observer_pause = None;
                    Ok(())
                } else {
                    let pause = Duration::try_from_secs_f64(seconds)
                        .map_err(|e| format!("{}: {}", describe_source(source), e))?;
                    conf.observer_pause = Some(pause);
                    Ok(())
                }
            },
        ),
        <dyn ConfigEntry>::new_string(
            "blocked_urls",
            "comma separated URLs the proxy refuses to connect to",
            "twitter.com,google.com,facebook.com",
            |conf, urls, _| {
                conf.blocked_urls = urls
                    .split(',')
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_enum(
            "letter_case",
            "formatting strategies the strategy page demonstrates",
            vec![
                <dyn ConfigEntry>::new_enum_variant(
                    "both",
                    "upper case, then lower case",
                    |conf, _| conf.letter_case = LetterCase::Both,
                ),
                <dyn ConfigEntry>::new_enum_variant("upper", "upper case only", |conf, _| {
                    conf.letter_case = LetterCase::Upper
                }),
                <dyn ConfigEntry>::new_enum_variant("lower", "lower case only", |conf, _| {
                    conf.letter_case = LetterCase::Lower
                }),
            ],
        ),
    ]
}
