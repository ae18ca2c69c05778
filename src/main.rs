// ==========================================
// 工地状态分级库 - 命令行入口
// ==========================================
// 用法:
//   site-status [--config PATH] [--set KEY=VALUE]... [--fixtures PATH]
//               [--locale en|zh-CN] [--query TEXT] [--facet VALUE]
//               [--json] [--log-json]
//
// 未指定 --fixtures 时使用内置演示数据
// --query 作用于全部列表; --facet 只作用于其取值所属的列表
//   (材料类别/工种/状态令牌), 其余列表不受影响
// ==========================================

use anyhow::{bail, Context};
use site_status::engine::{ListFilter, StatusBoard, SummaryEngine};
use site_status::format::{format_inr, format_percent};
use site_status::logging::LogFormat;
use site_status::{fixtures, i18n, logging, ClassifierConfig, FixtureSet, StatusClassifier};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    overrides: Vec<(String, String)>,
    fixtures: Option<PathBuf>,
    locale: Option<String>,
    query: Option<String>,
    facet: Option<String>,
    json: bool,
    log_json: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .with_context(|| format!("{} 需要一个参数值", name))
        };
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--set" => {
                let pair = value("--set")?;
                let (key, val) = pair
                    .split_once('=')
                    .with_context(|| format!("--set 需要 KEY=VALUE 形式: {}", pair))?;
                parsed.overrides.push((key.to_string(), val.to_string()));
            }
            "--fixtures" => parsed.fixtures = Some(PathBuf::from(value("--fixtures")?)),
            "--locale" => parsed.locale = Some(value("--locale")?),
            "--query" => parsed.query = Some(value("--query")?),
            "--facet" => parsed.facet = Some(value("--facet")?),
            "--json" => parsed.json = true,
            "--log-json" => parsed.log_json = true,
            other => bail!("未知参数: {}", other),
        }
    }

    Ok(parsed)
}

/// 按过滤条件裁剪 fixture（分面按列表范围生效）
fn filtered_set(set: &FixtureSet, filter: &ListFilter) -> FixtureSet {
    fn pick<R: site_status::engine::Searchable + Clone>(
        filter: &ListFilter,
        records: &[R],
    ) -> Vec<R> {
        filter.apply_scoped(records).into_iter().cloned().collect()
    }

    FixtureSet {
        materials: pick(filter, &set.materials),
        workers: pick(filter, &set.workers),
        inspections: pick(filter, &set.inspections),
        incidents: pick(filter, &set.incidents),
        budgets: pick(filter, &set.budgets),
        expenses: pick(filter, &set.expenses),
        projects: pick(filter, &set.projects),
    }
}

fn print_board(board: &StatusBoard<'_>) {
    println!("== Materials");
    for row in &board.materials {
        let m = row.record;
        let coverage = m
            .coverage_ratio()
            .map(|ratio| format!("{:.1}x", ratio))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<24} {:>10} {:<8} {:>6} {:<14} [{}]",
            m.name, m.quantity, m.unit, coverage, row.classification.label, row.classification.color
        );
    }

    println!("== Labor");
    for row in &board.workers {
        let w = row.record;
        println!(
            "  {:<24} {:<12} {:<14} [{}] {}/month",
            w.name,
            w.role,
            row.classification.label,
            row.classification.color,
            format_inr(w.salary)
        );
    }

    println!("== Safety inspections");
    for row in &board.inspections {
        let i = row.record;
        println!(
            "  {} {:<24} {:<14} [{}]",
            i.date, i.location, row.classification.label, row.classification.color
        );
    }

    println!("== Safety incidents");
    for row in &board.incidents {
        let i = row.record;
        println!(
            "  {} {:<24} {:<8} [{}] {:<14} [{}]",
            i.date,
            i.incident_type,
            row.classification.severity.label,
            row.classification.severity.color,
            row.classification.status.label,
            row.classification.status.color
        );
    }

    println!("== Budgets");
    for row in &board.budgets {
        let b = row.record;
        let view = &row.classification;
        println!(
            "  {:<12} {:>14} {:>14} {:>14} {:<10} [{}] {}",
            b.category,
            format_inr(b.allocated),
            format_inr(b.spent),
            format_inr(view.remaining),
            view.status.label,
            view.progress.color,
            format_percent(view.progress.display_ratio)
        );
    }

    println!("== Expenses");
    for row in &board.expenses {
        let e = row.record;
        println!(
            "  {} {:<32} {:>12} {:<10} [{}]",
            e.date,
            e.description,
            format_inr(e.amount),
            row.classification.label,
            row.classification.color
        );
    }

    println!("== Projects");
    for row in &board.projects {
        let p = row.record;
        println!(
            "  {:<24} {:<12} [{}] {}",
            p.name,
            row.classification.status.label,
            row.classification.status.color,
            format_percent(row.classification.progress_ratio)
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    logging::init(LogFormat::from_flag(args.log_json));

    tracing::info!("{} v{}", site_status::APP_NAME, site_status::VERSION);

    let mut config = ClassifierConfig::resolve(args.config.as_deref())
        .context("分级配置加载失败")?;
    for (key, value) in &args.overrides {
        config = config.with_override(key, value)?;
    }
    if let Some(locale) = &args.locale {
        config = config.with_locale(locale)?;
    }
    i18n::set_locale(&config.locale);

    let set = match &args.fixtures {
        Some(path) => fixtures::load_json(path)
            .with_context(|| format!("fixture 加载失败: {}", path.display()))?,
        None => fixtures::builtin(),
    };

    let filter = ListFilter::new()
        .with_query(args.query.as_deref().unwrap_or(""))
        .with_facet(args.facet.as_deref());
    let set = if filter.is_unrestricted() {
        set
    } else {
        filtered_set(&set, &filter)
    };

    let classifier = StatusClassifier::new(config);
    let board = classifier.classify_fixture_set(&set);
    let summary = SummaryEngine::new().summarize(&classifier, &set);

    if args.json {
        let output = serde_json::json!({
            "summary": summary,
            "board": board,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}: {} | {}: {} | {}: {} | {}: {} | {}: {} | {}: {}",
        i18n::t("summary.active_projects"),
        summary.active_projects,
        i18n::t("summary.pending_tasks"),
        summary.pending_tasks,
        i18n::t("summary.workers_on_site"),
        summary.workers_on_site,
        i18n::t("summary.safety_incidents"),
        summary.unresolved_incidents,
        i18n::t("summary.low_stock"),
        summary.low_stock_materials,
        i18n::t("summary.budget_used"),
        format_percent(summary.budget_ratio),
    );
    print_board(&board);

    Ok(())
}
