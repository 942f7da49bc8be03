use super::CurveError;

/// 펌프 곡선 표의 열 역할.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Flow,
    Head,
    Power,
    Efficiency,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Flow => "flow",
            ColumnRole::Head => "head",
            ColumnRole::Power => "power",
            ColumnRole::Efficiency => "efficiency",
        }
    }
}

/// 헤더 일치 규칙. 헤더는 소문자로 바꾼 뒤 비교한다.
#[derive(Debug, Clone, Copy)]
pub enum MatchRule {
    /// 헤더 안에 부분 문자열로 포함
    Contains(&'static str),
    /// 영숫자가 아닌 문자로 나눈 토큰 중 하나와 정확히 일치 (`Q (m3/h)`의 `q`)
    Token(&'static str),
}

impl MatchRule {
    fn matches(&self, header_lower: &str) -> bool {
        match self {
            MatchRule::Contains(s) => header_lower.contains(s),
            MatchRule::Token(t) => header_lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|tok| tok == *t),
        }
    }
}

/// 한 역할에 대한 규칙 묶음.
#[derive(Debug, Clone, Copy)]
pub struct RoleRules {
    pub role: ColumnRole,
    pub rules: &'static [MatchRule],
}

/// 기본 동의어 규칙. 순서대로 검사하며 먼저 맞는 역할이 그 헤더를 가져간다.
pub const DEFAULT_RULES: &[RoleRules] = &[
    RoleRules {
        role: ColumnRole::Flow,
        rules: &[
            MatchRule::Contains("débit"),
            MatchRule::Contains("debit"),
            MatchRule::Contains("flow"),
            MatchRule::Token("q"),
        ],
    },
    RoleRules {
        role: ColumnRole::Head,
        rules: &[
            MatchRule::Contains("hmt"),
            MatchRule::Contains("hauteur"),
            MatchRule::Contains("head"),
            MatchRule::Contains("pression"),
            MatchRule::Contains("pressure"),
            MatchRule::Token("h"),
        ],
    },
    RoleRules {
        role: ColumnRole::Power,
        rules: &[
            MatchRule::Contains("puissance"),
            MatchRule::Contains("power"),
            MatchRule::Token("p"),
        ],
    },
    RoleRules {
        role: ColumnRole::Efficiency,
        rules: &[
            MatchRule::Contains("rendement"),
            MatchRule::Contains("efficiency"),
            MatchRule::Token("eff"),
            MatchRule::Token("eta"),
            MatchRule::Token("η"),
        ],
    },
];

/// 역할별 열 인덱스.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub flow: usize,
    pub head: usize,
    pub power: Option<usize>,
    pub efficiency: Option<usize>,
}

/// 헤더 목록에서 유량/양정(필수), 동력/효율(선택) 열을 찾는다.
///
/// 각 헤더는 처음 맞는 역할 하나에만 배정되고, 같은 역할은 앞쪽 헤더가 우선한다.
pub fn resolve_columns<S: AsRef<str>>(
    headers: &[S],
    rules: &[RoleRules],
) -> Result<ColumnMap, CurveError> {
    let mut found: Vec<(ColumnRole, usize)> = Vec::new();

    for (idx, header) in headers.iter().enumerate() {
        let lower = header.as_ref().trim().to_lowercase();
        let role = rules
            .iter()
            .find(|rr| rr.rules.iter().any(|rule| rule.matches(&lower)))
            .map(|rr| rr.role);
        if let Some(role) = role {
            if !found.iter().any(|(r, _)| *r == role) {
                found.push((role, idx));
            }
        }
    }

    let lookup = |role: ColumnRole| found.iter().find(|(r, _)| *r == role).map(|(_, i)| *i);
    match (lookup(ColumnRole::Flow), lookup(ColumnRole::Head)) {
        (Some(flow), Some(head)) => Ok(ColumnMap {
            flow,
            head,
            power: lookup(ColumnRole::Power),
            efficiency: lookup(ColumnRole::Efficiency),
        }),
        (flow, head) => {
            let mut missing = Vec::new();
            if flow.is_none() {
                missing.push(ColumnRole::Flow);
            }
            if head.is_none() {
                missing.push(ColumnRole::Head);
            }
            Err(CurveError::ColumnsNotFound { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_rule_does_not_match_inside_words() {
        assert!(MatchRule::Token("h").matches("h (m)"));
        assert!(!MatchRule::Token("h").matches("shaft power"));
        assert!(MatchRule::Token("q").matches("q (m3/h)"));
    }
}
