//! 유량에 따른 배관 시스템 곡선(요구 양정) 샘플링.

use crate::calculation::ResultRecord;
use crate::hydraulics::flow::velocity;
use crate::hydraulics::head_loss::linear_loss;
use crate::units::flow::m3h_to_m3s;

/// 시스템 곡선 시작 유량 [m³/h]
pub const MIN_FLOW_M3_PER_H: f64 = 0.1;

/// 시스템 곡선 위의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemCurvePoint {
    pub flow_m3_per_h: f64,
    pub head_m: f64,
}

/// 시스템 곡선과 현재 운전점.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCurve {
    pub points: Vec<SystemCurvePoint>,
    /// 공칭 유량과 계산된 전양정
    pub operating_point: SystemCurvePoint,
}

/// 0.1 m³/h 부터 공칭 유량의 2배까지 `count`개 유량에서 요구 양정을 계산한다.
///
/// 공칭 조건의 마찰계수와 단면을 그대로 쓰고, 직관 손실과 정수두만 반영한다.
pub fn system_curve(result: &ResultRecord, count: usize) -> SystemCurve {
    let geometry = &result.geometry;
    let static_head = geometry.static_rise_m - geometry.static_drop_m;
    let max_flow = result.flow_m3_per_h * 2.0;

    let points = (0..count)
        .map(|i| {
            let flow_m3_per_h = linspace_at(MIN_FLOW_M3_PER_H, max_flow, count, i);
            let v = velocity(m3h_to_m3s(flow_m3_per_h), result.flow.section_m2);
            let loss = linear_loss(
                result.flow.friction.factor,
                geometry.total_length_m,
                result.diameter_m,
                v,
            );
            SystemCurvePoint {
                flow_m3_per_h,
                head_m: static_head + loss,
            }
        })
        .collect();

    SystemCurve {
        points,
        operating_point: SystemCurvePoint {
            flow_m3_per_h: result.flow_m3_per_h,
            head_m: result.manometric_head_m(),
        },
    }
}

fn linspace_at(start: f64, end: f64, count: usize, index: usize) -> f64 {
    if count <= 1 {
        return start;
    }
    start + (end - start) * index as f64 / (count - 1) as f64
}
