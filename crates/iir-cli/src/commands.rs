use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use iir_ingest::{DataPaths, convert_csv, default_data_dir, load_dataset};
use iir_model::{Column, DatasetStore};
use iir_query::{DatasetStats, PageView, Session, Vocabularies};

use iir_cli::browse::run_browse_loop;
use iir_cli::convert::{ConvertOutputs, write_documents};
use iir_cli::render::{print_page_table, render_plain, stats_table, vocabulary_tables};

use crate::cli::{
    BrowseArgs, ConvertArgs, DataArgs, OutputFormatArg, SearchArgs, VocabArgs, VocabFieldArg,
};

fn load_store(data: &DataArgs) -> Result<DatasetStore> {
    let paths = DataPaths::resolve(
        data.data_dir.clone(),
        data.records.clone(),
        data.mapping.clone(),
    );
    load_dataset(&paths).with_context(|| format!("load dataset from {}", paths.records.display()))
}

pub fn run_search(data: &DataArgs, args: &SearchArgs) -> Result<()> {
    let store = load_store(data)?;
    let mut session = Session::new(store, args.page_size);
    session.search(args.filters.criteria());
    let view = session.go_to_page(args.page);
    print_view(&view, args)
}

fn print_view(view: &PageView, args: &SearchArgs) -> Result<()> {
    match args.format {
        OutputFormatArg::Table => print_page_table(view, &args.columns).context("write page")?,
        OutputFormatArg::Plain => println!("{}", render_plain(view, &args.columns)),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(view).context("serialize page")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_browse(data: &DataArgs, args: &BrowseArgs) -> Result<()> {
    let store = load_store(data)?;
    let mut session = Session::new(store, args.page_size);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_browse_loop(&mut session, stdin.lock(), &mut stdout)
}

pub fn run_vocab(data: &DataArgs, args: &VocabArgs) -> Result<()> {
    let store = load_store(data)?;
    let vocabularies = Vocabularies::build(store.records());
    let columns: &[Column] = match args.field {
        VocabFieldArg::Route => &[Column::Route],
        VocabFieldArg::DosageForm => &[Column::DosageForm],
        VocabFieldArg::All => &[Column::Route, Column::DosageForm],
    };
    for table in vocabulary_tables(&vocabularies, store.field_mapping(), columns) {
        println!("{table}");
    }
    Ok(())
}

pub fn run_stats(data: &DataArgs) -> Result<()> {
    let store = load_store(data)?;
    let stats = DatasetStats::compute(store.records());
    println!("{}", stats_table(&stats));
    Ok(())
}

pub fn run_convert(data: &DataArgs, args: &ConvertArgs) -> Result<()> {
    let span = info_span!("convert", csv = %args.csv.display());
    let _guard = span.enter();
    let start = Instant::now();
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| data.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    let conversion = convert_csv(&args.csv).context("convert csv")?;
    let outputs = ConvertOutputs {
        mapping: !args.no_mapping,
        stats: !args.no_stats,
    };
    let stats = write_documents(&conversion, &output_dir, outputs)?;

    info!(
        records = conversion.records.len(),
        numeric_columns = conversion.numeric_columns.len(),
        output_dir = %output_dir.display(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    println!("{}", stats_table(&stats));
    Ok(())
}
