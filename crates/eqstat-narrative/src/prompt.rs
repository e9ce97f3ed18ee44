//! Prompt construction for the external narrative service.
//!
//! The prompt embeds the already-computed statistics so the service never
//! sees raw rows, only aggregates.

use std::fmt::Write as _;

use crate::context::NarrativeContext;

const SECTION_SEPARATOR: &str =
    "===============================================================";

/// Builds the analysis prompt from computed statistics.
pub fn build_prompt(ctx: &NarrativeContext) -> String {
    let report = ctx.report;
    let mut prompt = String::new();

    prompt.push_str(
        "As a senior chemical process engineer with 20+ years of experience, \
         analyze this industrial equipment dataset and provide actionable insights.\n\n",
    );

    let _ = writeln!(prompt, "{SECTION_SEPARATOR}");
    prompt.push_str("DATASET OVERVIEW\n");
    let _ = writeln!(prompt, "{SECTION_SEPARATOR}");
    let _ = writeln!(
        prompt,
        "Total Equipment Analyzed: {} units",
        report.total_count
    );
    prompt.push_str("Equipment Categories:\n");
    for (category, count) in report.type_distribution.iter().take(10) {
        let share = if report.total_count > 0 {
            *count as f64 / report.total_count as f64 * 100.0
        } else {
            0.0
        };
        let _ = writeln!(prompt, "  • {category}: {count} units ({share:.1}%)");
    }

    let _ = writeln!(prompt, "\n{SECTION_SEPARATOR}");
    prompt.push_str("OPERATIONAL PARAMETERS\n");
    let _ = writeln!(prompt, "{SECTION_SEPARATOR}");
    for (column, stats) in &report.statistics {
        let cv = NarrativeContext::coefficient_of_variation(stats);
        let _ = writeln!(
            prompt,
            "  • {column}: Mean={:.2}, StdDev={:.2}, CV={cv:.1}%",
            stats.mean, stats.std
        );
    }
    let _ = writeln!(
        prompt,
        "\nOverall System Health: {:.1}%",
        report.health_score_avg
    );

    let _ = writeln!(prompt, "\n{SECTION_SEPARATOR}");
    prompt.push_str("ANOMALY & RISK INDICATORS\n");
    let _ = writeln!(prompt, "{SECTION_SEPARATOR}");
    let _ = writeln!(
        prompt,
        "Statistical Outliers Detected: {} data points (Z-score > 3 sigma)",
        report.outliers_count
    );
    let _ = writeln!(
        prompt,
        "Equipment Below Optimal Performance (<70%): {} units",
        ctx.below_optimal_count()
    );
    let _ = writeln!(
        prompt,
        "Critical Equipment Requiring Immediate Attention (<50%): {} units",
        ctx.critical_count()
    );
    if !ctx.critical_units.is_empty() {
        prompt.push_str("\nCritical Equipment List:\n");
        for unit in ctx.critical_units.iter().take(5) {
            let _ = writeln!(
                prompt,
                "  • {}: Health {:.0}%",
                unit.name, unit.health_score
            );
        }
    }

    let _ = writeln!(prompt, "\n{SECTION_SEPARATOR}");
    prompt.push_str("CORRELATION ANALYSIS\n");
    let _ = writeln!(prompt, "{SECTION_SEPARATOR}");
    prompt.push_str("Strong Correlations (|r| > 0.7):\n");
    let strong = ctx.strong_correlations();
    if strong.is_empty() {
        prompt.push_str("  • No strong correlations detected\n");
    } else {
        for (pair, value) in strong {
            let _ = writeln!(prompt, "  • {pair}: {value:.2}");
        }
    }

    let _ = writeln!(prompt, "\n{SECTION_SEPARATOR}");
    prompt.push_str("REQUIRED ANALYSIS OUTPUT\n");
    let _ = writeln!(prompt, "{SECTION_SEPARATOR}");
    prompt.push_str(
        "\nProvide a comprehensive professional analysis in the following structure:\n\n\
         EXECUTIVE SUMMARY\n\
         Provide 3-4 sentences covering overall system health status, most critical \
         finding requiring immediate action, primary operational concern, and overall \
         risk level.\n\n\
         KEY FINDINGS\n\
         Provide 5-6 specific data-driven findings about equipment performance \
         patterns, parameter relationships, efficiency observations, unusual \
         patterns, and comparative analysis.\n\n\
         RISK ASSESSMENT\n\
         Identify 4-5 specific risks including equipment failure risks, safety \
         concerns, process efficiency risks, maintenance-related risks, and \
         operational continuity threats.\n\n\
         ACTIONABLE RECOMMENDATIONS\n\
         Provide 6-8 prioritized recommendations organized by timeline: IMMEDIATE \
         (24-48 hours), SHORT-TERM (1-2 weeks), MEDIUM-TERM (1-3 months), and \
         LONG-TERM (3-6 months). Be specific with equipment types, target parameter \
         ranges, expected impact, and monitoring frequency.\n\n\
         TECHNICAL INSIGHTS\n\
         Provide 3-4 deeper technical observations about process optimization, \
         energy efficiency, equipment lifecycle, and predictive maintenance.\n\n\
         Use professional engineering terminology. Be specific with numbers and \
         thresholds. Format with clear sections and bullet points.",
    );

    prompt
}
