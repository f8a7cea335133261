//! `morph locales`

use morph_convert::{CaseRule, Locale};
use serde_json::json;

use crate::cli::LocalesArgs;

pub fn run(args: &LocalesArgs, active: Locale) -> anyhow::Result<()> {
    if args.json {
        let table: Vec<_> = Locale::all()
            .iter()
            .map(|l| {
                json!({
                    "tag": l.tag(),
                    "decimal_separator": l.decimal_separator(),
                    "group_separator": l.group_separator(),
                    "negative_sign": l.negative_sign(),
                    "nan": l.nan_symbol(),
                    "infinity": l.positive_infinity(),
                    "turkic_case": l.case_rule() == CaseRule::Turkic,
                    "default": *l == active,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for l in Locale::all() {
        let marker = if *l == active { '*' } else { ' ' };
        println!(
            "{marker} {:<10} decimal {:?}  group {:?}  minus {:?}",
            l.tag(),
            l.decimal_separator(),
            l.group_separator(),
            l.negative_sign(),
        );
    }
    Ok(())
}
