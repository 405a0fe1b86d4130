//! Call analytics aggregation.
//!
//! Turns a set of call records into an [`AnalyticsSnapshot`] in a single pass.
//! The aggregation is pure: it never mutates its input, performs no I/O, and
//! returns identical output for identical input.
//!
//! Missing optional numbers (`overallScore`, metric scores) count as zero and
//! the record stays in the denominator.

use std::collections::BTreeMap;

use crate::models::{
    AgentPerformance, AnalyticsSnapshot, CallRecord, Sentiment, SentimentBreakdown,
};

/// Maximum number of agents reported in `top_performing_agents`.
pub const TOP_AGENT_LIMIT: usize = 5;

/// Compliance score at or above which a call counts as compliant.
pub const COMPLIANCE_THRESHOLD: f64 = 90.0;

#[derive(Debug, Default)]
struct AgentTally {
    total: i64,
    completed: i64,
}

impl AgentTally {
    fn record(&mut self, record: &CallRecord) {
        self.total += 1;
        if record.is_completed() {
            self.completed += 1;
        }
    }
}

/// Compute summary metrics over `records`.
///
/// Input order does not affect the result. An empty input yields the all-zero
/// snapshot with no top agents.
pub fn compute_analytics<'a, I>(records: I) -> AnalyticsSnapshot
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut total: i64 = 0;
    let mut completed: i64 = 0;
    let mut duration_sum: u64 = 0;
    let mut overall_scores: Vec<f64> = Vec::new();
    let mut compliant: i64 = 0;
    let mut compliance_scores: Vec<f64> = Vec::new();
    let mut quality_scores: Vec<f64> = Vec::new();
    let mut sentiment = SentimentBreakdown::default();
    let mut agents: BTreeMap<&str, AgentTally> = BTreeMap::new();

    for record in records {
        total += 1;
        if record.is_completed() {
            completed += 1;
        }
        duration_sum += u64::from(record.duration);
        overall_scores.push(record.overall_score.unwrap_or(0.0));

        if let Some(score) = record.compliance_score() {
            compliance_scores.push(score);
            if score >= COMPLIANCE_THRESHOLD {
                compliant += 1;
            }
        }
        quality_scores.push(record.mean_metric_score().unwrap_or(0.0));

        match record.sentiment {
            Some(Sentiment::Positive) => sentiment.positive += 1,
            Some(Sentiment::Neutral) => sentiment.neutral += 1,
            Some(Sentiment::Negative) => sentiment.negative += 1,
            None => {}
        }

        if let Some(agent) = record.agent_name() {
            agents.entry(agent).or_default().record(record);
        }
    }

    let mut top_performing_agents = rank_agents(agents);
    top_performing_agents.truncate(TOP_AGENT_LIMIT);

    AnalyticsSnapshot {
        total_calls: total,
        completed_calls: completed,
        avg_duration: rounded_mean(duration_sum as f64, total),
        success_rate: percentage(completed, total),
        avg_call_score: rounded_mean(ordered_sum(overall_scores), total),
        compliance_rate: percentage(compliant, total),
        sentiment_breakdown: sentiment,
        quality_score: rounded_mean(ordered_sum(quality_scores), total),
        compliance_score: rounded_mean(ordered_sum(compliance_scores), total),
        top_performing_agents,
    }
}

/// Rank every agent appearing in `records` by success rate.
///
/// Records without an agent are skipped. Ordering matches
/// `top_performing_agents` but the list is not truncated.
pub fn agent_performance<'a, I>(records: I) -> Vec<AgentPerformance>
where
    I: IntoIterator<Item = &'a CallRecord>,
{
    let mut agents: BTreeMap<&str, AgentTally> = BTreeMap::new();
    for record in records {
        if let Some(agent) = record.agent_name() {
            agents.entry(agent).or_default().record(record);
        }
    }
    rank_agents(agents)
}

/// Sort agents by success rate descending, then by name ascending.
fn rank_agents(agents: BTreeMap<&str, AgentTally>) -> Vec<AgentPerformance> {
    // BTreeMap iteration is already name-ascending; the stable sort keeps it for ties.
    let mut ranked: Vec<AgentPerformance> = agents
        .into_iter()
        .map(|(agent, tally)| AgentPerformance {
            agent: agent.to_string(),
            total_calls: tally.total,
            completed_calls: tally.completed,
            success_rate: percentage(tally.completed, tally.total),
        })
        .collect();
    ranked.sort_by(|a, b| b.success_rate.cmp(&a.success_rate));
    ranked
}

/// Sum of `values` in ascending order, so the result depends only on the set of values.
fn ordered_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

/// `round(sum / count)`, or 0 when `count` is 0.
fn rounded_mean(sum: f64, count: i64) -> i64 {
    if count == 0 {
        return 0;
    }
    (sum / count as f64).round() as i64
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
fn percentage(part: i64, whole: i64) -> i64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as i64
}
