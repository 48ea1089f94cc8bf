//! Shared helpers for assess-core integration tests.

#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

pub fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

/// Two questions, two students: Scenario from the mastery walkthrough.
pub fn two_question_df() -> DataFrame {
    test_df(vec![
        ("Q1 [Score]", vec!["1.00 / 1", "1.00 / 1"]),
        ("Q2 [Score]", vec!["0.00 / 1", "1.00 / 1"]),
    ])
}

pub fn i32_values(df: &DataFrame, name: &str) -> Vec<i32> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap())
        .collect()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
