use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!(
        "markdown".parse::<OutputFormat>().unwrap(),
        OutputFormat::Markdown
    );
    assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("sarif"));
}

#[test]
fn chart_format_from_str() {
    assert_eq!("html".parse::<ChartFormat>().unwrap(), ChartFormat::Html);
    assert_eq!("SVG".parse::<ChartFormat>().unwrap(), ChartFormat::Svg);
    assert!("png".parse::<ChartFormat>().is_err());
}

#[test]
fn defaults() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(ChartFormat::default(), ChartFormat::Html);
}
