//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(차트, 보고서 도구)에서도 재사용한다.

pub mod app;
pub mod calculation;
pub mod config;
pub mod error;
pub mod fluid;
pub mod hydraulics;
pub mod i18n;
pub mod params;
pub mod pump;
pub mod reference;
pub mod report;
pub mod system_curve;
pub mod units;
