//! Deterministic fallback narrative.
//!
//! Pure string interpolation of already-computed statistics; produces the
//! same text for the same report every time, with no external calls.

use std::fmt::Write as _;

use crate::context::NarrativeContext;

/// Renders the fallback narrative for a report.
pub fn fallback_narrative(ctx: &NarrativeContext) -> String {
    let report = ctx.report;
    let distribution = report.health_score_distribution;
    let critical_count = ctx.critical_count();
    let warning_count = ctx.warning_count();

    let action_msg = if critical_count > 0 {
        "Immediate action is required for critical equipment."
    } else {
        "System is operating within acceptable parameters."
    };
    let variability_level = if ctx.high_variability() {
        "High"
    } else {
        "Moderate"
    };
    let data_quality = if ctx.outliers_exceed_noise_floor() {
        "Sensor calibration recommended"
    } else {
        "Data quality is acceptable"
    };

    let resolved = &report.column_names;
    let (press_min, press_max, press_mean) = ctx.parameter_range(resolved.pressure.as_deref());
    let (temp_min, temp_max, temp_mean) = ctx.parameter_range(resolved.temperature.as_deref());
    let (flow_min, flow_max, flow_mean) = ctx.parameter_range(resolved.flow.as_deref());

    let mut text = String::new();

    let _ = writeln!(text, "## EXECUTIVE SUMMARY\n");
    let _ = writeln!(
        text,
        "The system comprises {} equipment units with an overall health score of \
         {:.1}%. Analysis reveals {} statistical outliers and {} units requiring \
         attention. {action_msg}\n",
        report.total_count,
        report.health_score_avg,
        report.outliers_count,
        ctx.below_optimal_count(),
    );

    let _ = writeln!(text, "## KEY FINDINGS\n");
    let _ = writeln!(
        text,
        "• Equipment Distribution: {} equipment categories analyzed",
        report.type_distribution.len()
    );
    let _ = writeln!(
        text,
        "• Health Status: {} excellent, {} good, {warning_count} fair, {critical_count} poor",
        distribution.excellent, distribution.good
    );
    text.push_str("• Parameter Ranges:\n");
    let _ = writeln!(
        text,
        "  - Pressure: {press_min:.2} - {press_max:.2} bar (avg: {press_mean:.2})"
    );
    let _ = writeln!(
        text,
        "  - Temperature: {temp_min:.2} - {temp_max:.2} C (avg: {temp_mean:.2})"
    );
    let _ = writeln!(
        text,
        "  - Flowrate: {flow_min:.2} - {flow_max:.2} (avg: {flow_mean:.2})"
    );
    let _ = writeln!(
        text,
        "• Outlier Detection: {} data points exceed 3-sigma threshold",
        report.outliers_count
    );
    let _ = writeln!(
        text,
        "• Variability: {variability_level} parameter variability detected\n"
    );

    let _ = writeln!(text, "## RISK ASSESSMENT\n");
    let _ = writeln!(
        text,
        "• Critical Equipment Risk: {critical_count} units below 50% health score \
         require immediate inspection"
    );
    let _ = writeln!(
        text,
        "• Performance Degradation: {warning_count} units showing early signs of \
         performance issues"
    );
    let _ = writeln!(
        text,
        "• Statistical Anomalies: {} outlier data points may indicate sensor issues \
         or process upsets",
        report.outliers_count
    );
    let _ = writeln!(text, "• Operational Risk Level: {}\n", ctx.risk_level());

    let _ = writeln!(text, "## ACTIONABLE RECOMMENDATIONS\n");
    text.push_str("IMMEDIATE (24-48 hours):\n");
    let _ = writeln!(
        text,
        "1. Inspect {critical_count} critical equipment units with health scores below 50%"
    );
    text.push_str("2. Verify sensor calibration for equipment showing outlier readings\n");
    text.push_str(
        "3. Review operating procedures for equipment with high parameter variability\n\n",
    );
    text.push_str("SHORT-TERM (1-2 weeks):\n");
    let _ = writeln!(
        text,
        "4. Implement enhanced monitoring for {warning_count} equipment units in fair condition"
    );
    text.push_str(
        "5. Conduct preventive maintenance on equipment approaching lower health thresholds\n",
    );
    text.push_str("6. Analyze correlation patterns to optimize process parameters\n\n");
    text.push_str("MEDIUM-TERM (1-3 months):\n");
    text.push_str("7. Develop predictive maintenance schedule based on health score trends\n");
    text.push_str("8. Standardize operating parameters to reduce variability\n");
    text.push_str("9. Implement automated alerting for equipment health degradation\n\n");
    text.push_str("LONG-TERM (3-6 months):\n");
    text.push_str("10. Consider equipment upgrades for consistently underperforming units\n");
    text.push_str("11. Establish baseline performance metrics for all equipment categories\n");
    text.push_str("12. Implement continuous monitoring and data analytics platform\n\n");

    let _ = writeln!(text, "## TECHNICAL INSIGHTS\n");
    text.push_str(
        "• Process Optimization: Parameter correlations suggest opportunities for \
         efficiency improvements\n",
    );
    text.push_str(
        "• Maintenance Strategy: Health score distribution indicates need for \
         condition-based maintenance\n",
    );
    let _ = writeln!(text, "• Data Quality: {data_quality}");
    let _ = writeln!(
        text,
        "• System Reliability: Overall health score of {:.1}% indicates {} system reliability",
        report.health_score_avg,
        ctx.reliability()
    );

    text.push_str("\n---\n");
    text.push_str(
        "Note: AI analysis temporarily unavailable. This is an automated statistical summary.",
    );

    text
}
