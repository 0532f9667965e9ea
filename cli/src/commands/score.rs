use crate::cli::ScoreArgs;
use crate::report::render_breakdown;
use anyhow::Result;
use mbwind_engine::{compute_confidence, sport_tip, Conditions};

pub fn exec(args: ScoreArgs) -> Result<()> {
    let conditions = Conditions {
        wind_kts: args.wind,
        wind_dir: args.dir,
        gust_kts: args.gust,
        thermal_delta_f: args.delta,
        marine_layer_suppression: args.suppression,
        hour: args.hour,
    };
    let result = compute_confidence(&conditions, args.sport);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Confidence: {}/100 - {}", result.score, result.recommendation);
        println!("{}", render_breakdown(&result));
        println!(
            "{} tip: {}",
            args.sport.label(),
            sport_tip(args.wind, args.gust, args.sport)
        );
    }
    Ok(())
}
