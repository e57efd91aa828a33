// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use serde::Serialize;

use crate::config::{options::AppOptions, Settings};
use crate::core::csv::Delim;
use crate::engine::{
    kpi::{EfficiencyMetrics, KpiCalculator},
    stats::{baseline_or_default, BaselineStats},
    view::{update_view, DashboardView, FilterSelection},
};
use crate::store::{self, DataSet};

#[derive(Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    pub filters: FilterSelection,
    pub out: Option<PathBuf>,
    pub json: bool,
    pub quickstart: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    stats: &'a BaselineStats,
    efficiency: &'a EfficiencyMetrics,
    health_score: f64,
    view: &'a DashboardView,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env();
    let params = parse_args(env::args().skip(1), &settings)?;

    if settings.ensure_dirs().is_ok() {
        crate::log::init(settings.log_file());
    }
    logf!("CLI: start, input={:?}, quickstart={}", params.options.load.path, params.quickstart);

    let ds = if params.quickstart {
        crate::fixtures::quickstart_dataset()
    } else {
        store::load_dataset(&params.options.load)?.0
    };

    let out = render(&ds, &params)?;
    print!("{out}");

    if let Some(path) = &params.out {
        let view = update_view(&ds, &params.filters);
        let written = store::export_table(path, &view.table_rows, params.options.export_format)?;
        eprintln!("Wrote {}", written.display());
    }
    Ok(())
}

/// Whole report as text (or JSON) for one dataset + selection.
pub fn render(ds: &DataSet, params: &Params) -> Result<String, Box<dyn Error>> {
    let stats = baseline_or_default(ds);
    let kpi = KpiCalculator::new(ds);
    let efficiency = kpi.calculate_efficiency_metrics();
    let health_score = kpi.overall_health_score();
    let view = update_view(ds, &params.filters);

    if params.json {
        let report = Report { stats: &stats, efficiency: &efficiency, health_score, view: &view };
        return Ok(serde_json::to_string_pretty(&report)? + "\n");
    }

    let mut out = s!();
    out.push_str(&format!("SSAs: {}\n", stats.total));
    out.push_str(&format!("Críticas (S3.7): {} ({:.2}%)\n", stats.critical, stats.critical_rate));
    match (stats.period.inicio, stats.period.fim) {
        (Some(a), Some(b)) => out.push_str(&format!("Período: {a} → {b}\n")),
        _ => out.push_str("Período: -\n"),
    }
    out.push_str(&format!(
        "Responsáveis: programação={}, execução={}\n",
        stats.responsible.programacao, stats.responsible.execucao
    ));
    out.push_str(&format!(
        "Taxa de programação: {:.2}  Execução simples: {:.2}  Saúde: {:.2}\n",
        efficiency.scheduling_rate, efficiency.simple_execution_rate, health_score
    ));

    push_counts(&mut out, "Por estado", &stats.by_state);
    push_counts(&mut out, "Por responsável (programação)", &view.resp_prog_counts);
    push_counts(&mut out, "Por responsável (execução)", &view.resp_exec_counts);
    push_counts(&mut out, "Programadas por semana", &view.week_counts);
    if view.detail_visible {
        push_counts(&mut out, "Detalhe: pendentes por estado", &view.detail_state_counts);
        push_counts(&mut out, "Detalhe: programadas por semana", &view.detail_week_counts);
    }

    out.push('\n');
    out.push_str(&store::table_to_string(&view.table_rows, params.options.export_format));
    Ok(out)
}

fn push_counts(out: &mut String, title: &str, counts: &crate::engine::Counts) {
    out.push_str(&format!("\n{title}:\n"));
    if counts.is_empty() {
        out.push_str("  (vazio)\n");
    }
    for (k, n) in counts.iter() {
        let label = if k.is_empty() { "(em branco)" } else { k };
        out.push_str(&format!("  {label}: {n}\n"));
    }
}

pub fn parse_args<I>(args: I, settings: &Settings) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut prog = None;
    let mut exec = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                params.options.load.path = Some(PathBuf::from(args.next().ok_or("Missing input path")?))
            }
            "--header-row" => {
                params.options.load.header_row = args.next().ok_or("Missing value for --header-row")?.parse()?
            }
            "--delim" => {
                let v = args.next().ok_or("Missing value for --delim")?;
                params.options.load.format =
                    Some(Delim::parse(&v).ok_or_else(|| format!("Unknown delimiter: {v}"))?);
            }
            "--prog" => prog = Some(args.next().ok_or("Missing value for --prog")?),
            "--exec" => exec = Some(args.next().ok_or("Missing value for --exec")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export_format =
                    Delim::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--json" => params.json = true,
            "--quickstart" => params.quickstart = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    params.filters = FilterSelection::new(prog, exec);
    if params.options.load.path.is_none() {
        params.options.load.path = Some(settings.default_input());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_settings_input() {
        let settings = Settings::from_root("/srv/ssa");
        let p = parse_args(args(&[]), &settings).unwrap();
        assert_eq!(p.options.load.path, Some(settings.default_input()));
        assert!(!p.filters.is_active());
    }

    #[test]
    fn parses_filters_and_format() {
        let settings = Settings::from_root(".");
        let p = parse_args(args(&["--prog", "Alice", "--format", "tsv", "--json"]), &settings).unwrap();
        assert_eq!(p.filters.scheduling_owner(), Some("Alice"));
        assert_eq!(p.filters.execution_owner(), None);
        assert_eq!(p.options.export_format, Delim::Tsv);
        assert!(p.json);
    }

    #[test]
    fn rejects_unknown_args() {
        let settings = Settings::from_root(".");
        assert!(parse_args(args(&["--bogus"]), &settings).is_err());
        assert!(parse_args(args(&["--format", "xlsx"]), &settings).is_err());
    }

    #[test]
    fn text_report_for_quickstart() {
        let ds = crate::fixtures::quickstart_dataset();
        let params = Params { quickstart: true, ..Params::default() };
        let out = render(&ds, &params).unwrap();
        assert!(out.contains("SSAs: 2"));
        assert!(out.contains("Críticas (S3.7): 1 (50.00%)"));
        assert!(out.contains("Número,Estado,Resp. Prog.,Resp. Exec.,Semana Prog.,Prioridade"));
        assert!(!out.contains("Detalhe:"));
    }
}
