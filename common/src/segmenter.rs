//! セクション分割
//!
//! レポート本文を見出し（マーカー）で区切り、セクションごとの本文を取り出す。
//!
//! ## 仕様
//! - 定義順と出現順がそろう見出しの最長列を採用する（同じ長さなら前にある方）
//! - 本文は「マーカーの終わり」から「次に見つかったマーカーの始まり」（なければ末尾）まで
//! - 見つからないマーカー・順序が逆のマーカーはセクションなし（エラーにしない）

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// セクションの種類（テンプレートの出現順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// # 전체적인 분위기는 ...
    OverallMood,
    /// ## 1. 분위기 정의 및 유형별 확률
    MoodProbability,
    /// ## 2. 분위기 판단 근거
    JudgmentBasis,
    /// ## 3-1. 현재 분위기에 맞춰 추가하면 좋을 가구 추천
    AddRecommendation,
    /// ## 3-2. 제거하면 좋을 가구 추천
    RemoveRecommendation,
    /// ## 3-3. 분위기별 바꿨으면 하는 가구 추천
    ChangeRecommendation,
    /// #6. 이런 스타일 어떠세요?
    RecommendedStyles,
    /// ## 정리
    Summary,
}

impl SectionKind {
    /// 定義順の全セクション
    pub const ALL: [SectionKind; 8] = [
        SectionKind::OverallMood,
        SectionKind::MoodProbability,
        SectionKind::JudgmentBasis,
        SectionKind::AddRecommendation,
        SectionKind::RemoveRecommendation,
        SectionKind::ChangeRecommendation,
        SectionKind::RecommendedStyles,
        SectionKind::Summary,
    ];

    /// 見出しの正規表現
    pub fn marker(&self) -> &'static Regex {
        match self {
            SectionKind::OverallMood => &OVERALL_MOOD_RE,
            SectionKind::MoodProbability => &MOOD_PROBABILITY_RE,
            SectionKind::JudgmentBasis => &JUDGMENT_BASIS_RE,
            SectionKind::AddRecommendation => &ADD_RE,
            SectionKind::RemoveRecommendation => &REMOVE_RE,
            SectionKind::ChangeRecommendation => &CHANGE_RE,
            SectionKind::RecommendedStyles => &RECOMMENDED_STYLES_RE,
            SectionKind::Summary => &SUMMARY_RE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::OverallMood => "overall_mood",
            SectionKind::MoodProbability => "mood_probability",
            SectionKind::JudgmentBasis => "judgment_basis",
            SectionKind::AddRecommendation => "add_recommendation",
            SectionKind::RemoveRecommendation => "remove_recommendation",
            SectionKind::ChangeRecommendation => "change_recommendation",
            SectionKind::RecommendedStyles => "recommended_styles",
            SectionKind::Summary => "summary",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

lazy_static! {
    static ref OVERALL_MOOD_RE: Regex = Regex::new(r"#\s*전체적인 분위기는").unwrap();
    static ref MOOD_PROBABILITY_RE: Regex =
        Regex::new(r"##\s*1\.\s*분위기 정의 및 유형별 확률").unwrap();
    static ref JUDGMENT_BASIS_RE: Regex = Regex::new(r"##\s*2\.\s*분위기 판단 근거").unwrap();
    static ref ADD_RE: Regex =
        Regex::new(r"##\s*3-1\.\s*현재 분위기에 맞춰 추가하면 좋을 가구 추천").unwrap();
    static ref REMOVE_RE: Regex = Regex::new(r"##\s*3-2\.\s*제거하면 좋을 가구 추천").unwrap();
    static ref CHANGE_RE: Regex =
        Regex::new(r"##\s*3-3\.\s*분위기별 바꿨으면 하는 가구 추천").unwrap();
    static ref RECOMMENDED_STYLES_RE: Regex =
        Regex::new(r"#{1,2}\s*6\.\s*이런 스타일 어떠세요\?").unwrap();
    static ref SUMMARY_RE: Regex = Regex::new(r"#{1,2}\s*정리").unwrap();
}

/// 1つのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub body: &'a str,
}

/// 分割結果（出現順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> Sections<'a> {
    /// セクション本文を取得（なければNone）
    pub fn get(&self, kind: SectionKind) -> Option<&'a str> {
        self.sections.iter().find(|s| s.kind == kind).map(|s| s.body)
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section<'a>> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// 既定のマーカー順でレポートを分割
pub fn segment(text: &str) -> Sections<'_> {
    segment_with(text, &SectionKind::ALL)
}

/// 見出しの候補（種類の順位, 見出し開始, 本文開始）
#[derive(Debug, Clone, Copy)]
struct Candidate {
    rank: usize,
    start: usize,
    end: usize,
}

/// 候補列の優劣（長い方が良い。同じ長さなら順位・位置が前の方）
fn better_chain(a: &[usize], b: &[usize], candidates: &[Candidate]) -> bool {
    if a.len() != b.len() {
        return a.len() > b.len();
    }
    let key = |chain: &[usize]| -> Vec<(usize, usize)> {
        chain
            .iter()
            .map(|&i| (candidates[i].rank, candidates[i].start))
            .collect()
    };
    key(a) < key(b)
}

/// 定義順かつ出現順に並ぶ見出しの最長列を選ぶ
///
/// 順序の崩れた見出しが1つあっても、それ以外のセクションは残る。
fn longest_ordered_chain(candidates: &[Candidate]) -> Vec<usize> {
    let mut chains: Vec<Vec<usize>> = Vec::with_capacity(candidates.len());
    let mut best: Vec<usize> = Vec::new();

    for (i, cand) in candidates.iter().enumerate() {
        let mut chain: Vec<usize> = Vec::new();
        for (j, prev) in candidates[..i].iter().enumerate() {
            if prev.rank < cand.rank
                && prev.end <= cand.start
                && better_chain(&chains[j], &chain, candidates)
            {
                chain = chains[j].clone();
            }
        }
        chain.push(i);

        if better_chain(&chain, &best, candidates) {
            best = chain.clone();
        }
        chains.push(chain);
    }

    best
}

/// 指定したマーカー順でレポートを分割
pub fn segment_with<'a>(text: &'a str, order: &[SectionKind]) -> Sections<'a> {
    let mut candidates: Vec<Candidate> = order
        .iter()
        .enumerate()
        .flat_map(|(rank, kind)| {
            kind.marker().find_iter(text).map(move |m| Candidate {
                rank,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect();
    candidates.sort_by_key(|c| (c.start, c.rank));

    let chain: Vec<Candidate> = longest_ordered_chain(&candidates)
        .into_iter()
        .map(|i| candidates[i])
        .collect();

    for (rank, kind) in order.iter().enumerate() {
        if !chain.iter().any(|c| c.rank == rank) {
            debug!(section = %kind, "セクション見出しなし");
        }
    }

    let sections = chain
        .iter()
        .enumerate()
        .map(|(idx, cand)| {
            let body_end = chain
                .get(idx + 1)
                .map(|next| next.start)
                .unwrap_or(text.len());
            Section {
                kind: order[cand.rank],
                body: &text[cand.end..body_end],
            }
        })
        .collect();

    Sections { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "# 전체적인 분위기는 **차분하고 따뜻한 북유럽 스타일**입니다.

## 1. 분위기 정의 및 유형별 확률
- 차분한(50%): 설명1

## 2. 분위기 판단 근거
- 소재: 원목

## 3-1. 현재 분위기에 맞춰 추가하면 좋을 가구 추천
- 러그 : 따뜻함

## 3-2. 제거하면 좋을 가구 추천
- 철제 선반 : 차가움

## 3-3. 분위기별 바꿨으면 하는 가구 추천
- 소파 -> 패브릭 소파 : 부드러움

#6. 이런 스타일 어떠세요?
- 재팬디 : 차분함

## 정리
- 요약1
";

    #[test]
    fn test_segment_full_report() {
        let sections = segment(REPORT);
        assert_eq!(sections.len(), 8);

        let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());

        let mood = sections.get(SectionKind::MoodProbability).unwrap();
        assert_eq!(mood.trim(), "- 차분한(50%): 설명1");

        let summary = sections.get(SectionKind::Summary).unwrap();
        assert_eq!(summary.trim(), "- 요약1");
    }

    #[test]
    fn test_segment_body_excludes_marker() {
        let sections = segment(REPORT);
        let overall = sections.get(SectionKind::OverallMood).unwrap();
        assert!(overall.starts_with(" **차분하고"));
        assert!(!overall.contains("## 1."));
    }

    #[test]
    fn test_segment_missing_section() {
        let text = "## 1. 분위기 정의 및 유형별 확률\n- 모던한(80%): 설명\n## 3-1. 현재 분위기에 맞춰 추가하면 좋을 가구 추천\n- 러그: 이유\n";
        let sections = segment(text);

        assert!(!sections.contains(SectionKind::OverallMood));
        assert!(!sections.contains(SectionKind::JudgmentBasis));

        // 次に「見つかった」マーカーまでが本文
        let mood = sections.get(SectionKind::MoodProbability).unwrap();
        assert_eq!(mood.trim(), "- 모던한(80%): 설명");
        let add = sections.get(SectionKind::AddRecommendation).unwrap();
        assert_eq!(add.trim(), "- 러그: 이유");
    }

    #[test]
    fn test_segment_out_of_order_marker_ignored() {
        let text = "## 정리\n- 먼저 나온 요약\n## 1. 분위기 정의 및 유형별 확률\n- 모던한(80%): 설명\n";
        let sections = segment(text);

        assert!(sections.contains(SectionKind::MoodProbability));
        // 「정리」は1.より前にしかないので無視される
        assert!(!sections.contains(SectionKind::Summary));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_segment_stray_heading_inside_summary() {
        let text = "## 1. 분위기 정의 및 유형별 확률\n- 모던한(80%): 설명입니다\n## 정리\n- 요약\n- 참고: # 전체적인 분위기는 **모던 스타일**";
        let sections = segment(text);

        assert!(!sections.contains(SectionKind::OverallMood));
        assert_eq!(
            sections.get(SectionKind::MoodProbability).unwrap().trim(),
            "- 모던한(80%): 설명입니다"
        );
        let summary = sections.get(SectionKind::Summary).unwrap();
        assert!(summary.contains("- 요약"));
        assert!(summary.contains("전체적인 분위기는"));
    }

    #[test]
    fn test_segment_repeated_heading_uses_ordered_one() {
        // 冒頭の「정리」は順序が合わないので、末尾の「정리」を使う
        let text = "## 정리 먼저\n## 1. 분위기 정의 및 유형별 확률\n- 모던한(80%): 설명\n## 정리\n- 끝";
        let sections = segment(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get(SectionKind::Summary).unwrap().trim(), "- 끝");
        assert_eq!(
            sections.get(SectionKind::MoodProbability).unwrap().trim(),
            "- 모던한(80%): 설명"
        );
    }

    #[test]
    fn test_segment_no_markers() {
        let sections = segment("그냥 평범한 텍스트입니다.\n- 항목: 값");
        assert!(sections.is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_segment_with_custom_order() {
        let text = "## 2. 분위기 판단 근거\n- 소재: 원목\n## 정리\n- 끝";
        let sections = segment_with(text, &[SectionKind::JudgmentBasis, SectionKind::Summary]);
        assert_eq!(sections.get(SectionKind::JudgmentBasis).unwrap().trim(), "- 소재: 원목");
        assert_eq!(sections.get(SectionKind::Summary).unwrap().trim(), "- 끝");
    }

    #[test]
    fn test_recommended_styles_marker_variants() {
        let one = segment("#6. 이런 스타일 어떠세요?\n- 모던 : 이유");
        let two = segment("## 6. 이런 스타일 어떠세요?\n- 모던 : 이유");
        assert!(one.contains(SectionKind::RecommendedStyles));
        assert!(two.contains(SectionKind::RecommendedStyles));
    }
}
