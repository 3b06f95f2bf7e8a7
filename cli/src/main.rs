use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use portfolio_core::{MilestoneList, Presentation, PresentationConfig, SUMMARY_HEADER};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-cli",
    about = "Xem nhanh các cột mốc và bài học của trang portfolio."
)]
struct Args {
    /// File JSON chứa danh sách cột mốc thay cho danh sách dựng sẵn.
    #[arg(short, long, global = true)]
    milestones: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// In bản tóm tắt bài học, mỗi vai trò một dòng.
    Summary,
    /// Tra bài học theo tên vai trò.
    Lesson {
        #[arg(short, long)]
        role: String,
    },
    /// Mô phỏng nút "Reveal next" và in dòng trạng thái.
    Reveal {
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },
    /// Xuất danh sách dưới dạng JSON.
    Export,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let milestones = load_milestones(args.milestones.as_ref())?;

    match args.command {
        Command::Summary => {
            println!("{SUMMARY_HEADER}");
            for line in milestones.lesson_summary() {
                println!("{line}");
            }
        }
        Command::Lesson { role } => println!("{}", milestones.lesson_for_role(&role)),
        Command::Reveal { count } => {
            for line in reveal_lines(milestones, count) {
                println!("{line}");
            }
        }
        Command::Export => {
            let json = serde_json::to_string_pretty(&milestones)
                .context("Không serialize được danh sách cột mốc")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn load_milestones(path: Option<&PathBuf>) -> anyhow::Result<MilestoneList> {
    let Some(path) = path else {
        return Ok(MilestoneList::journey());
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Không đọc được file {path:?}"))?;
    MilestoneList::from_json_str(&data)
        .with_context(|| format!("Danh sách cột mốc không hợp lệ trong {path:?}"))
}

fn reveal_lines(milestones: MilestoneList, count: usize) -> Vec<String> {
    let mut presentation = Presentation::new(milestones, PresentationConfig::default());
    presentation.render_cards();
    (0..count)
        .map(|_| presentation.reveal_next().status)
        .collect()
}
