use crate::infra::{load_catalog, parse_date, parse_profile};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::guidance::{
    CareerAssistant, CareerCatalog, CareerId, CareerRecord, ChatMessage, GuidanceServiceError,
    Profile, RecommendationEngine, RecommendationReport, Recommendations, Tier,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Assessment profile as inline JSON or a path to a JSON file
    #[arg(long, value_parser = parse_profile)]
    pub(crate) profile: Profile,
    /// Write the text report to this path
    #[arg(long)]
    pub(crate) report: Option<PathBuf>,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct CareerArgs {
    /// Catalog id, e.g. `data-scientist`
    pub(crate) id: String,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question for the assistant
    pub(crate) question: String,
    /// Assessment profile to share with the assistant
    #[arg(long, value_parser = parse_profile)]
    pub(crate) profile: Option<Profile>,
}

fn configured_catalog() -> Result<CareerCatalog, AppError> {
    let config = AppConfig::load()?;
    Ok(load_catalog(&config.guidance)?)
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        report,
        today,
    } = args;

    let catalog = configured_catalog()?;
    let recommendations = RecommendationEngine::default().evaluate(Some(&profile), &catalog);
    print!("{}", render_recommendations(&recommendations));

    if let Some(target) = report {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let report = RecommendationReport::build(&profile, &recommendations, today);
        let path = if target.is_dir() {
            target.join(report.file_name())
        } else {
            target
        };
        std::fs::write(&path, report.render_text())?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_career(args: CareerArgs) -> Result<(), AppError> {
    let catalog = configured_catalog()?;
    let id = CareerId(args.id);
    let career = catalog
        .get(&id)
        .ok_or_else(|| GuidanceServiceError::CareerNotFound(id.clone()))?;
    print!("{}", render_career(career));
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = configured_catalog()?;
    println!("Career catalog ({} careers)", catalog.len());
    for career in &catalog {
        println!(
            "  {:<22} {} [{}]",
            career.id.as_str(),
            career.title,
            career.stream.join(", ")
        );
    }
    Ok(())
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let catalog = configured_catalog()?;
    let history = vec![ChatMessage::greeting(), ChatMessage::user(args.question)];
    let reply = CareerAssistant::default()
        .reply(&history, args.profile.as_ref(), &catalog)
        .map_err(GuidanceServiceError::from)?;
    println!("{}", reply.message.content);
    Ok(())
}

pub(crate) fn render_recommendations(recommendations: &Recommendations) -> String {
    let mut out = String::new();
    if recommendations.is_empty() {
        out.push_str("No recommendations for this profile.\n");
        return out;
    }

    for tier in Tier::ordered() {
        let careers = recommendations.tier(tier);
        if careers.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", tier.label());
        for (index, scored) in careers.iter().enumerate() {
            let floor = if scored.floor_applied { " (stream floor)" } else { "" };
            let _ = writeln!(
                out,
                "  {}. {} - {}% match{}",
                index + 1,
                scored.career.title,
                scored.match_score,
                floor
            );
            for component in &scored.components {
                let _ = writeln!(
                    out,
                    "     + {} {}: {}",
                    component.points,
                    component.factor.label(),
                    component.notes
                );
            }
        }
    }
    out
}

pub(crate) fn render_career(career: &CareerRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", career.title, career.id);
    if !career.description.is_empty() {
        let _ = writeln!(out, "{}", career.description);
    }
    let _ = writeln!(out, "  Salary: {}", career.salary);
    let _ = writeln!(out, "  Growth: {}", career.growth);
    if let Some(stress) = career.stress_level {
        let _ = writeln!(out, "  Stress level: {}", stress.label());
    }
    let _ = writeln!(out, "  Work environment: {}", career.work_environment);
    let _ = writeln!(out, "  Streams: {}", career.stream.join(", "));
    let _ = writeln!(out, "  Skills: {}", career.skills.join(", "));
    let _ = writeln!(out, "  Tools: {}", career.tools.join(", "));
    let _ = writeln!(out, "  Exams: {}", career.exams.join(", "));
    match &career.education.pg {
        Some(pg) => {
            let _ = writeln!(out, "  Education: {} then {}", career.education.ug, pg);
        }
        None => {
            let _ = writeln!(out, "  Education: {}", career.education.ug);
        }
    }
    if !career.roadmap.is_empty() {
        let _ = writeln!(out, "  Roadmap:");
        for (index, step) in career.roadmap.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", index + 1, step);
        }
    }
    out
}
