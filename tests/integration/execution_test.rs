use anyhow::Result;
use csvquery::query::executor::result::AggregateResult;
use csvquery::query::parser::ParseError;
use csvquery::{load_csv, run_query, QueryConfig, QueryEngine, QueryError};

#[path = "../common/mod.rs"]
mod common;
use common::{create_empty_csv, create_sample_csv, create_temp_csv, names};

fn config(path: &std::path::Path, where_expr: Option<&str>, aggregate_expr: Option<&str>) -> QueryConfig {
    QueryConfig {
        where_expr: where_expr.map(String::from),
        aggregate_expr: aggregate_expr.map(String::from),
        ..QueryConfig::new(path)
    }
}

#[test]
fn test_load_sample_file() -> Result<()> {
    let file = create_sample_csv()?;
    let dataset = load_csv(file.path(), b',')?;
    assert_eq!(dataset.row_count(), 3);
    assert_eq!(dataset.rows()[0].get("name"), Some("iphone 15 pro"));
    assert_eq!(dataset.rows()[2].get("price"), Some("199"));
    Ok(())
}

#[test]
fn test_filter_and_aggregate_from_file() -> Result<()> {
    let file = create_sample_csv()?;
    let output = QueryEngine::new(config(file.path(), Some("price>500"), Some("avg=rating"))).execute()?;

    assert_eq!(names(output.dataset()), vec!["iphone 15 pro", "galaxy s23 ultra"]);
    assert_eq!(output.aggregate_line().as_deref(), Some("Avg rating: 4.850000"));
    Ok(())
}

#[test]
fn test_run_query_renders_text() -> Result<()> {
    let file = create_sample_csv()?;
    let text = run_query(config(file.path(), None, Some("avg=rating")))?;

    assert!(text.contains("iphone 15 pro"));
    assert!(text.contains("| name "));
    assert!(text.ends_with("Avg rating: 4.766667\n"));
    Ok(())
}

#[test]
fn test_non_numeric_aggregate_prints_sentinel() -> Result<()> {
    let file = create_sample_csv()?;
    let text = run_query(config(file.path(), None, Some("avg=brand")))?;
    assert!(text.ends_with("Aggregation is only possible for numeric columns.\n"));
    Ok(())
}

#[test]
fn test_empty_file_has_no_aggregate_value() -> Result<()> {
    let file = create_empty_csv()?;
    let output = QueryEngine::new(config(file.path(), Some("price>1"), Some("avg=price"))).execute()?;
    assert_eq!(output.row_count(), 0);
    assert_eq!(output.aggregate().map(|a| a.result), Some(AggregateResult::Empty));
    assert_eq!(output.to_string(), "");
    Ok(())
}

#[test]
fn test_invalid_filter_fails_before_filtering() -> Result<()> {
    let file = create_sample_csv()?;
    let err = QueryEngine::new(config(file.path(), Some("price"), None)).execute().unwrap_err();
    assert!(matches!(err, QueryError::Parse(ParseError::InvalidFilterSyntax(_))));
    Ok(())
}

#[test]
fn test_invalid_aggregate() -> Result<()> {
    let file = create_sample_csv()?;
    let err = QueryEngine::new(config(file.path(), None, Some("sum=price"))).execute().unwrap_err();
    assert!(matches!(err, QueryError::Parse(ParseError::InvalidAggregateFunction(_))));
    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.csv");
    let err = QueryEngine::new(config(&path, None, None)).execute().unwrap_err();
    assert!(matches!(err, QueryError::FileNotFound(ref msg) if msg.contains("missing.csv")));
    Ok(())
}

#[test]
fn test_ragged_file() -> Result<()> {
    let file = create_temp_csv("name,price\nwidget,10\nbroken\n")?;
    let err = QueryEngine::new(config(file.path(), None, None)).execute().unwrap_err();
    assert!(matches!(err, QueryError::CsvRead(_)));
    Ok(())
}

#[test]
fn test_semicolon_delimiter() -> Result<()> {
    let file = create_temp_csv("name;price\nwidget;10\ngadget;30\n")?;
    let cfg = QueryConfig {
        delimiter: b';',
        ..config(file.path(), Some("price>15"), Some("max=price"))
    };
    let output = QueryEngine::new(cfg).execute()?;
    assert_eq!(names(output.dataset()), vec!["gadget"]);
    assert_eq!(output.aggregate_line().as_deref(), Some("Max price: 30.000000"));
    Ok(())
}

#[test]
fn test_first_row_decides_column_type() -> Result<()> {
    // First row is text, so the whole column compares lexically
    let file = create_temp_csv("name,code\na,x1\nb,20\nc,3\n")?;
    let output = QueryEngine::new(config(file.path(), Some("code<5"), None)).execute()?;
    assert_eq!(names(output.dataset()), vec!["b", "c"]);

    // First row is numeric, so a later text cell is an error
    let file = create_temp_csv("name,code\na,1\nb,x2\n")?;
    let err = QueryEngine::new(config(file.path(), Some("code<5"), None)).execute().unwrap_err();
    assert!(matches!(err, QueryError::MalformedNumericValue { .. }));
    Ok(())
}
