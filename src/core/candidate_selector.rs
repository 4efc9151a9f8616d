//! 후보 선택기
//!
//! 종목이 지정되지 않았을 때 스냅샷에서 가장 강한 종목 하나를 고른다.
//! 점수 = 24시간 변동률 × log10(거래량 + 1)

use crate::error::ResearchError;
use crate::models::candidate::{CandidateScore, InstrumentSnapshot, TopMover};

// 누락되었거나 유한하지 않은 값은 0 으로 취급
fn finite_or_zero(value: Option<f64>) -> f64 {
  value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// 모멘텀 × 유동성 점수
pub fn candidate_score(change_pct: f64, volume: f64) -> f64 {
  change_pct * (volume + 1.0).log10()
}

fn score_entry(entry: &InstrumentSnapshot) -> CandidateScore {
  let change_pct = finite_or_zero(entry.change_pct_24h);
  // 음수 거래량은 로그가 정의되지 않으므로 0 으로 자른다
  let volume = finite_or_zero(entry.volume).max(0.0);

  CandidateScore {
    instrument_id: entry.id.clone(),
    change_pct,
    volume,
    score: candidate_score(change_pct, volume),
  }
}

/// 가장 높은 점수의 종목 ID. 동점이면 먼저 나온 종목
pub fn pick_strongest(snapshot: &[InstrumentSnapshot]) -> Result<String, ResearchError> {
  let mut best: Option<CandidateScore> = None;

  for entry in snapshot {
    let scored = score_entry(entry);
    let is_better = match &best {
      Some(current) => scored.score > current.score,
      None => true,
    };
    if is_better {
      best = Some(scored);
    }
  }

  let best = best.ok_or(ResearchError::NoCandidates)?;
  log::debug!("강한 후보 선택: {} (점수 {:.4})", best.instrument_id, best.score);
  Ok(best.instrument_id)
}

/// 전체 점수를 내림차순으로 (동점은 입력 순서 유지)
pub fn rank_candidates(snapshot: &[InstrumentSnapshot]) -> Vec<CandidateScore> {
  let mut scores: Vec<CandidateScore> = snapshot.iter().map(score_entry).collect();
  scores.sort_by(|a, b| b.score.total_cmp(&a.score));
  scores
}

/// 주식용: 상승 상위 목록에서 티커가 있는 첫 종목
pub fn pick_top_mover(movers: &[TopMover]) -> Result<String, ResearchError> {
  movers.iter()
    .map(|m| m.ticker.trim())
    .find(|ticker| !ticker.is_empty())
    .map(str::to_string)
    .ok_or(ResearchError::NoCandidates)
}
