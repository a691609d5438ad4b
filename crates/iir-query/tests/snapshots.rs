use iir_model::{Column, Field, FieldMapping, Record};
use iir_query::project_columns;

#[test]
fn projected_row_serializes_for_renderers() {
    let record = Record::new()
        .with(Field::Route, "ORAL")
        .with(Field::RouteCn, "口服")
        .with(Field::RouteExplanation, "经口给药")
        .with(Field::CasNumber, "50-78-2");
    let row = project_columns(
        &record,
        &FieldMapping::default_document(),
        &[Column::Route, Column::CasNumber],
    );
    insta::assert_json_snapshot!(row, @r###"
    {
      "cells": [
        {
          "column": "route",
          "label": "给药途径",
          "value": "口服",
          "annotation": "ORAL",
          "tooltip": "经口给药"
        },
        {
          "column": "cas_number",
          "label": "CAS号",
          "value": "50-78-2"
        }
      ]
    }
    "###);
}
