use approx::assert_relative_eq;
use pendula::{Config, Parameters, simulate};
use uom::si::{angle::radian, length::meter, time::second};

#[test]
fn parameters_from_toml_fill_missing_fields() {
    let params: Parameters = toml::from_str(
        r"
        length = 0.5
        initial_angle = 0.2
        ",
    )
    .expect("valid toml");

    assert_relative_eq!(params.length.get::<meter>(), 0.5);
    assert_relative_eq!(params.initial_angle.get::<radian>(), 0.2);
    assert_relative_eq!(params.time_step.get::<second>(), 0.001);
    assert!(simulate(&params, &Config::default()).is_ok());
}

#[test]
fn config_from_toml() {
    let config: Config = toml::from_str("max_steps = 50").expect("valid toml");

    assert_eq!(config.max_steps, 50);
    assert_relative_eq!(config.drift_tolerance, Config::default().drift_tolerance);
}

#[test]
fn parameters_survive_json() {
    let params = Parameters::default().length_si(0.3).initial_velocity_si(0.05);

    let json = serde_json::to_string(&params).expect("serializable");
    let back: Parameters = serde_json::from_str(&json).expect("deserializable");

    assert_eq!(back, params);
}

#[test]
fn invalid_values_load_but_fail_validation() {
    let params: Parameters = serde_json::from_str(r#"{ "time_step": -0.01 }"#).expect("valid json");

    assert_eq!(params.validate(), Err("time step must be finite and positive"));
    assert!(simulate(&params, &Config::default()).is_err());
}
