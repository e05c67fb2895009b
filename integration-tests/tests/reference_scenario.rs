//! The worked example: AoA 10°, ρ = 1.225 kg/m³, v = 25 m/s, A = 1.0 m².

use aerosim_aero::{
    AeroForces, AngleOfAttack, FlowState, ThinAirfoil, Wing, WingGeometry, WingInput,
    angle_of_attack_to_coefficients, calculate_downforce, calculate_drag,
};
use aerosim_core::Model;
use approx::assert_relative_eq;

#[test]
fn free_functions() {
    let (cl, cd) = angle_of_attack_to_coefficients(10.0);
    assert_relative_eq!(cl, 1.0966, epsilon = 1e-4);
    assert_relative_eq!(cd, 0.23266, epsilon = 1e-5);

    let downforce = calculate_downforce(1.225, 25.0, 1.0, cl);
    let drag = calculate_drag(1.225, 25.0, 1.0, cd);
    assert_relative_eq!(downforce, 419.80, epsilon = 0.01);
    assert_relative_eq!(drag, 89.07, epsilon = 0.01);
}

#[test]
fn wing_model_matches_free_functions() {
    let wing = Wing::new(WingGeometry::from_si(1.0).unwrap());
    let input = WingInput {
        flow: FlowState::from_si(1.225, 25.0).unwrap(),
        angle_of_attack: AngleOfAttack::from_degrees(10.0),
    };
    let loads = wing.call(&input).unwrap();

    let (cl, cd) = angle_of_attack_to_coefficients(10.0);
    assert_eq!(loads.coefficients.cl, cl);
    assert_eq!(loads.coefficients.cd, cd);
    assert_eq!(
        loads.forces.downforce_newtons(),
        calculate_downforce(1.225, 25.0, 1.0, cl)
    );
    assert_eq!(
        loads.forces.drag_newtons(),
        calculate_drag(1.225, 25.0, 1.0, cd)
    );
}

#[test]
fn airfoil_and_forces_compose() {
    let coefficients = ThinAirfoil::default()
        .call(&AngleOfAttack::from_degrees(10.0))
        .unwrap();
    let forces = AeroForces::new(
        &FlowState::from_si(1.225, 25.0).unwrap(),
        &WingGeometry::from_si(1.0).unwrap(),
        &coefficients,
    );

    assert_relative_eq!(forces.downforce_newtons(), 419.80, epsilon = 0.01);
    assert_relative_eq!(coefficients.efficiency(), 4.7134, epsilon = 1e-4);
}

#[test]
fn doubling_speed_quadruples_forces() {
    let wing = Wing::new(WingGeometry::from_si(1.0).unwrap());
    let at = |speed| WingInput {
        flow: FlowState::from_si(1.225, speed).unwrap(),
        angle_of_attack: AngleOfAttack::from_degrees(10.0),
    };

    let slow = wing.loads(&at(25.0)).forces;
    let fast = wing.loads(&at(50.0)).forces;
    assert_relative_eq!(fast.downforce_newtons(), 4.0 * slow.downforce_newtons());
    assert_relative_eq!(fast.drag_newtons(), 4.0 * slow.drag_newtons());
}

#[test]
fn negative_angle_gives_lift_instead_of_downforce() {
    let wing = Wing::new(WingGeometry::from_si(1.0).unwrap());
    let loads = wing.loads(&WingInput {
        flow: FlowState::from_si(1.225, 25.0).unwrap(),
        angle_of_attack: AngleOfAttack::from_degrees(-10.0),
    });

    assert_relative_eq!(loads.forces.downforce_newtons(), -419.80, epsilon = 0.01);
    assert_relative_eq!(loads.forces.drag_newtons(), 89.07, epsilon = 0.01);
}
