use super::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn converts_primary_hues_at_background_saturation_and_lightness() {
    assert_eq!(Hsl::background(0).to_color32(), Color32::from_rgb(240, 168, 168));
    assert_eq!(Hsl::background(120).to_color32(), Color32::from_rgb(168, 240, 168));
    assert_eq!(Hsl::background(240).to_color32(), Color32::from_rgb(168, 168, 240));
}

#[test]
fn formats_like_css() {
    assert_eq!(Hsl::background(210).to_string(), "hsl(210, 70%, 80%)");
}

#[test]
fn random_background_stays_on_the_hue_circle() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2_000 {
        let hsl = Hsl::random_background(&mut rng);
        assert!(hsl.hue < 360);
        assert_eq!(hsl.saturation, BACKGROUND_SATURATION);
        assert_eq!(hsl.lightness, BACKGROUND_LIGHTNESS);
        seen.insert(hsl.hue / 60);
    }
    assert_eq!(seen.len(), 6, "every sextant of the hue circle is reachable");
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let black = Color32::from_rgb(0, 0, 0);
    let white = Color32::from_rgb(255, 255, 255);
    assert_eq!(lerp_color(black, white, 0.0), black);
    assert_eq!(lerp_color(black, white, 1.0), white);
    assert_eq!(lerp_color(black, white, 0.5), Color32::from_rgb(128, 128, 128));
    assert_eq!(lerp_color(black, white, 3.0), white);
}

#[test]
fn color_transition_eases_over_half_a_second() {
    let red = Color32::from_rgb(200, 0, 0);
    let blue = Color32::from_rgb(0, 0, 200);
    let mut fade = ColorTransition::settled(red);
    assert!(fade.is_settled(0.0));

    fade.retarget(blue, 10.0);
    assert_eq!(fade.sample(10.0), red);
    assert_eq!(fade.sample(10.25), Color32::from_rgb(100, 0, 100));
    assert!(!fade.is_settled(10.25));
    assert_eq!(fade.sample(10.5), blue);
    assert!(fade.is_settled(10.5));
}

#[test]
fn retarget_mid_fade_starts_from_the_visible_color() {
    let red = Color32::from_rgb(200, 0, 0);
    let blue = Color32::from_rgb(0, 0, 200);
    let green = Color32::from_rgb(0, 200, 0);
    let mut fade = ColorTransition::settled(red);
    fade.retarget(blue, 0.0);
    fade.retarget(green, 0.25);
    assert_eq!(fade.sample(0.25), Color32::from_rgb(100, 0, 100));
    assert_eq!(fade.sample(0.75), green);
}
