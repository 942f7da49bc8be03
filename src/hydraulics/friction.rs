use tracing::warn;

use super::flow::LAMINAR_LIMIT;

/// Colebrook-White 반복 최대 횟수
pub const MAX_ITERATIONS: usize = 50;
/// 연속 반복값 차이 허용치
pub const TOLERANCE: f64 = 1e-8;
const INITIAL_GUESS: f64 = 0.02;

/// Darcy 마찰계수와 반복 수렴 정보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionSolution {
    pub factor: f64,
    /// 수행한 반복 횟수 (층류/무유동은 0)
    pub iterations: usize,
    /// 허용치 안에서 수렴했는지 여부. 층류/무유동은 항상 true.
    pub converged: bool,
}

impl FrictionSolution {
    fn exact(factor: f64) -> Self {
        Self {
            factor,
            iterations: 0,
            converged: true,
        }
    }
}

/// Darcy 마찰계수를 구한다.
///
/// - Re = 0 : 0 (무유동)
/// - Re < 2000 : 64/Re
/// - 그 외 : Colebrook-White 고정점 반복. 50회 안에 수렴하지 않으면
///   마지막 값을 그대로 돌려주고 `converged = false`로 표시한다.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> FrictionSolution {
    if reynolds == 0.0 {
        return FrictionSolution::exact(0.0);
    }
    if reynolds < LAMINAR_LIMIT {
        return FrictionSolution::exact(64.0 / reynolds);
    }
    colebrook_white(reynolds, relative_roughness)
}

fn colebrook_white(reynolds: f64, relative_roughness: f64) -> FrictionSolution {
    let mut f = INITIAL_GUESS;
    for i in 0..MAX_ITERATIONS {
        let f_new = colebrook_step(f, reynolds, relative_roughness);
        if (f_new - f).abs() < TOLERANCE {
            return FrictionSolution {
                factor: f_new,
                iterations: i + 1,
                converged: true,
            };
        }
        f = f_new;
    }
    warn!(
        reynolds,
        relative_roughness,
        factor = f,
        "Colebrook-White did not converge within {MAX_ITERATIONS} iterations"
    );
    FrictionSolution {
        factor: f,
        iterations: MAX_ITERATIONS,
        converged: false,
    }
}

fn colebrook_step(f: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let inner = relative_roughness / 3.7 + 2.51 / (reynolds * f.sqrt());
    1.0 / (-2.0 * inner.log10()).powi(2)
}
