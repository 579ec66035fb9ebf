//! Interactive driver for the EarnBlitz forms.
//!
//! Picks a form, prompts for each field on stdin with blur-style
//! validation feedback, then hands the values to the form's simulated
//! backend. `watch` runs the ad countdown instead of a form.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use earnblitz_core::countdown::{AD_DURATION_SECS, AdCountdown};
use earnblitz_core::flows::{Acknowledger, AdminGate, TaskDesk, WithdrawalDesk};
use earnblitz_core::forms;
use formwork::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Points granted by the demo ad.
const DEMO_REWARD_POINTS: f64 = 25.0;

fn usage() {
    eprintln!("Usage: earnblitz-cli [registration|login|withdrawal|admin|task|watch]");
    eprintln!("       earnblitz-cli --spec <file.json>");
}

#[tokio::main]
async fn main() {
    // File logging, so the prompt output stays clean.
    if let Ok(log_file) = File::create("earnblitz.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("withdrawal") => {
            let desk = WithdrawalDesk::new();
            drive_form(forms::withdrawal(forms::DEFAULT_MIN_WITHDRAWAL), &desk).await?;
            if let Some(receipt) = desk.receipts().last() {
                println!("Receipt {} for {} points.", receipt.id, receipt.amount);
            }
        }
        Some("registration") => {
            let ack = Acknowledger::new("registration");
            drive_form(forms::registration(), &ack).await?;
        }
        Some("login") => {
            let ack = Acknowledger::new("login");
            drive_form(forms::login(), &ack).await?;
        }
        Some("admin") => {
            let gate = AdminGate::new("admin", "password");
            drive_form(forms::admin_login(), &gate).await?;
        }
        Some("task") => {
            let desk = TaskDesk::new();
            drive_form(forms::task(), &desk).await?;
            println!("{} task(s) on file.", desk.tasks().len());
        }
        Some("watch") => watch_ad().await?,
        Some("--spec") => {
            let Some(path) = args.get(1) else {
                usage();
                return Ok(());
            };
            let spec: FormSpec = serde_json::from_reader(File::open(path)?)?;
            spec.check()?;
            let ack = Acknowledger::new(spec.name().to_string());
            drive_form(spec, &ack).await?;
        }
        Some(_) => usage(),
    }

    Ok(())
}

/// Prompt for every field, validating on entry the way the pages validate
/// on blur, then submit.
async fn drive_form<S: Submitter + ?Sized>(
    spec: FormSpec,
    submitter: &S,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("-- {} --", spec.name());

    let fields: BTreeMap<String, Field> = spec
        .rules()
        .iter()
        .map(|r| (r.field_id.clone(), Field::new(r.label.clone())))
        .collect();
    let controller = FormController::new(spec, fields)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for rule in controller.spec().rules() {
        loop {
            print!("{}: ", rule.label);
            io::stdout().flush()?;

            let Some(line) = lines.next().transpose()? else {
                println!();
                return Ok(());
            };

            let field = controller
                .field(&rule.field_id)
                .expect("controller binds every spec field");
            field.set_value(line.trim_end());
            controller.on_blur(&rule.field_id);

            match field.error() {
                Some(message) => println!("  ! {message}"),
                None => break,
            }
        }
    }

    println!("Submitting...");
    match controller.submit(submitter).await {
        SubmitResult::Completed(outcome) => {
            println!("{}", outcome.message());
            for error in outcome.field_errors() {
                if !error.message.is_empty() {
                    println!("  ! {error}");
                }
            }
        }
        SubmitResult::Rejected(result) => {
            for error in result.errors() {
                println!("  ! {error}");
            }
        }
        SubmitResult::Busy => println!("A submission is already in flight."),
        SubmitResult::Failed(e) => eprintln!("{e}"),
    }

    Ok(())
}

/// Run the ad countdown and claim the reward when it unlocks.
async fn watch_ad() -> Result<(), Box<dyn std::error::Error>> {
    println!("-- watch ad --");
    println!("Press Enter to start the ad.");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let countdown = AdCountdown::new(AD_DURATION_SECS, DEMO_REWARD_POINTS);
    countdown.start()?;

    let runner = {
        let countdown = countdown.clone();
        tokio::spawn(async move { countdown.run().await })
    };

    while countdown.remaining_secs() > 0 {
        print!(
            "\rAd playing... {:>2} s left ({:>3.0}%) ",
            countdown.remaining_secs(),
            countdown.progress()
        );
        io::stdout().flush()?;
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    runner.await?;
    println!();

    if let Some(message) = countdown.status_message() {
        println!("{message}");
    }
    let points = countdown.claim()?;
    println!("Reward claimed! {points} points added to your wallet.");

    Ok(())
}
