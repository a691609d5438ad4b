use iir_cli::render::{
    navigation_hint, page_table, render_plain, tooltip_notes, vocabulary_tables,
};
use iir_model::{
    Column, DatasetStore, Field, FieldLabel, FieldMapping, FilterCriteria, Record,
};
use iir_query::{Session, Vocabularies};

fn session(page_size: usize) -> Session {
    let records = vec![
        Record::new()
            .with(Field::IngredientName, "SUCROSE")
            .with(Field::IngredientNameCn, "蔗糖")
            .with(Field::Route, "ORAL")
            .with(Field::RouteCn, "口服")
            .with(Field::RouteExplanation, "经口给药")
            .with(Field::CasNumber, "57-50-1"),
        Record::new()
            .with(Field::IngredientName, "TALC")
            .with(Field::Route, "ORAL")
            .with(Field::CasNumber, "14807-96-6"),
        Record::new()
            .with(Field::IngredientName, "LACTOSE")
            .with(Field::Route, "TOPICAL"),
    ];
    Session::new(
        DatasetStore::new(records, FieldMapping::default_document()),
        page_size,
    )
}

const COLUMNS: [Column; 3] = [Column::IngredientName, Column::Route, Column::CasNumber];

#[test]
fn plain_page_puts_chinese_first() {
    let mut session = session(2);
    let view = session.search(FilterCriteria::new().with_route("ORAL"));
    insta::assert_snapshot!(render_plain(&view, &COLUMNS), @r"
    共 2 条记录
    第 1 页，共 1 页
    蔗糖 (SUCROSE) | 口服 (ORAL) | 57-50-1
    TALC | ORAL | 14807-96-6
    ");
}

#[test]
fn explanations_become_notes() {
    let session = session(50);
    let view = session.current_page();
    assert_eq!(tooltip_notes(&view, &COLUMNS), vec!["ORAL: 经口给药"]);
    assert!(tooltip_notes(&view, &[Column::CasNumber]).is_empty());

    let table = page_table(&view, &[]).expect("non-empty page").to_string();
    assert!(table.contains("成分名称"));
    assert!(table.contains("口服 *"));
}

#[test]
fn navigation_hint_tracks_page_bounds() {
    let mut session = session(1);
    assert_eq!(navigation_hint(&session.current_page()), "上一页 | [n] 下一页");
    let middle = session.change_page(1).expect("page 2 exists");
    assert_eq!(navigation_hint(&middle), "[p] 上一页 | [n] 下一页");
    let last = session.change_page(1).expect("page 3 exists");
    assert_eq!(navigation_hint(&last), "[p] 上一页 | 下一页");
}

#[test]
fn empty_result_has_no_table() {
    let mut session = session(2);
    let view = session.search(FilterCriteria::new().with_route("NASAL"));
    assert!(page_table(&view, &[]).is_none());
    assert_eq!(render_plain(&view, &[]), "共 0 条记录\n第 1 页，共 0 页");
}

#[test]
fn vocabulary_titles_follow_the_translation_table() {
    let records = vec![
        Record::new()
            .with(Field::Route, "ORAL")
            .with(Field::RouteCn, "口服"),
    ];
    let vocabularies = Vocabularies::build(&records);
    let mut mapping = FieldMapping::new();
    mapping.insert("ROUTE", FieldLabel::Plain("途径".to_string()));

    let tables = vocabulary_tables(
        &vocabularies,
        &mapping,
        &[Column::Route, Column::DosageForm, Column::CasNumber],
    );
    assert_eq!(tables.len(), 2);
    let routes = tables[0].to_string();
    assert!(routes.contains("途径"));
    assert!(!routes.contains("给药途径"));
    assert!(routes.contains("口服 (ORAL)"));
    // No entry in the table: the built-in label is used.
    assert!(tables[1].to_string().contains("剂型"));
}
