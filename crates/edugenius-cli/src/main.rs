//! EduGenius CLI
//!
//! Terminal front end for the EduGenius orchestration core: a role menu,
//! the student tutoring chat, and the teacher content generator. Stands in
//! for the web views; all generated Markdown is printed verbatim.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use edugenius_core::{
    ContentType, Dashboard, Difficulty, GenerationParams, TurnRejected, DEFAULT_DURATION,
    DEFAULT_GRADE, DEFAULT_QUESTION_COUNT,
};
use edugenius_gateway::{GatewayConfig, ModelGateway};
use tracing_subscriber::EnvFilter;

/// EduGenius - AI-ассистент для учёбы
///
/// Студентам — ИИ-репетитор с диалогом; учителям — генератор планов
/// уроков и тестов. Требует API ключ Gemini в переменной окружения
/// GEMINI_API_KEY (или API_KEY).
#[derive(Parser, Debug)]
#[command(name = "edugenius")]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the model identifier
    #[arg(short, long, value_name = "MODEL")]
    model: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing subscriber with appropriate filter
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("EduGenius starting");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Runs the role menu loop.
async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = GatewayConfig::from_env();
    if let Some(model) = args.model {
        config.model = model;
    }
    if config.api_key.is_none() {
        tracing::warn!("no API credential configured; generation requests will fail");
    }

    let gateway = ModelGateway::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut dashboard = Dashboard::default();

    loop {
        println!();
        println!("Добро пожаловать в EduGenius");
        println!("  [1] Войти как ученик");
        println!("  [2] Войти как учитель");
        println!("  [q] Выход");

        let Some(choice) = prompt(&mut lines, "> ")? else {
            break;
        };
        match choice.trim() {
            "1" => {
                dashboard.log_in_student(&gateway);
                run_student(&mut dashboard, &mut lines).await?;
            }
            "2" => {
                dashboard.log_in_teacher();
                run_teacher(&mut dashboard, &gateway, &mut lines).await?;
            }
            "q" | "Q" => break,
            _ => println!("Неизвестная команда."),
        }
    }

    Ok(())
}

/// Student dashboard: the tutoring chat REPL. `/logout` leaves.
async fn run_student<L>(dashboard: &mut Dashboard, lines: &mut L) -> anyhow::Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    println!();
    println!("Кабинет Ученика. Команда /logout — выйти.");
    if let Some(greeting) = dashboard
        .as_student_mut()
        .and_then(|student| student.chat.transcript().first())
    {
        println!("Репетитор: {}", greeting.text);
    }

    loop {
        let Some(input) = prompt(lines, "Вы: ")? else {
            break;
        };
        if input.trim() == "/logout" {
            break;
        }
        let Some(student) = dashboard.as_student_mut() else {
            break;
        };
        match student.chat.send(&input).await {
            Ok(reply) => println!("Репетитор: {reply}"),
            // Nothing was appended or sent; just re-prompt.
            Err(TurnRejected::EmptyInput | TurnRejected::ReplyPending) => {}
        }
    }

    dashboard.log_out();
    Ok(())
}

/// Teacher dashboard: the content generator form loop. `q` leaves.
async fn run_teacher<L>(
    dashboard: &mut Dashboard,
    gateway: &ModelGateway,
    lines: &mut L,
) -> anyhow::Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    println!();
    println!("Кабинет Учителя — Генератор Контента");

    loop {
        let Some(choice) = prompt(lines, "Тип контента [1 — урок, 2 — тест, q — выйти]: ")?
        else {
            break;
        };
        let content_type = match choice.trim() {
            "1" => ContentType::Lesson,
            "2" => ContentType::Quiz,
            "q" | "Q" => break,
            _ => {
                println!("Неизвестная команда.");
                continue;
            }
        };

        let Some(topic) = prompt(lines, "Тема: ")? else {
            break;
        };
        if topic.trim().is_empty() {
            println!("Тема не может быть пустой.");
            continue;
        }

        let grade_prompt = format!("Уровень [{DEFAULT_GRADE}]: ");
        let Some(grade) = prompt(lines, &grade_prompt)? else {
            break;
        };
        let grade_level = if grade.trim().is_empty() {
            DEFAULT_GRADE.to_string()
        } else {
            grade
        };

        let detail_prompt = match content_type {
            ContentType::Lesson => format!("Длительность [{DEFAULT_DURATION}]: "),
            ContentType::Quiz => format!("Кол-во вопросов [{DEFAULT_QUESTION_COUNT}]: "),
        };
        let Some(detail) = prompt(lines, &detail_prompt)? else {
            break;
        };

        let params = GenerationParams {
            topic,
            grade_level,
            detail,
            difficulty: Difficulty::default(),
        };

        let Some(teacher) = dashboard.as_teacher_mut() else {
            break;
        };
        teacher.desk.select(content_type);

        println!("Думаю...");
        match teacher.desk.generate(gateway, &params).await {
            Ok(text) => {
                println!();
                println!("{text}");
                println!();
            }
            Err(rejected) => {
                tracing::debug!(%rejected, "generation request rejected");
                println!("Заполните форму и попробуйте снова.");
            }
        }
    }

    dashboard.log_out();
    Ok(())
}

/// Prints a prompt and reads one line. `None` means end of input.
fn prompt<L>(lines: &mut L, text: &str) -> anyhow::Result<Option<String>>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
