//! Flight scripts: whitespace-separated steps replayed against a camera.
//!
//! ```text
//! forward=0.5 look=10,-5 right=0.25
//! ```
//! `<direction>=<seconds>` calls the keyboard path with the direction token
//! as written, so unknown directions are skipped the same way the camera
//! skips them. `look=<dx>,<dy>` feeds a cursor delta in pixels.

use anyhow::{Context, Result, bail};
use terra_camera::Camera;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Move { direction: String, seconds: f32 },
    Look { dx: f32, dy: f32 },
}

pub fn parse(script: &str) -> Result<Vec<Step>> {
    script.split_whitespace().map(parse_step).collect()
}

fn parse_step(token: &str) -> Result<Step> {
    let Some((name, value)) = token.split_once('=') else {
        bail!("step {token:?} is missing '='");
    };

    if name.eq_ignore_ascii_case("look") {
        let (dx, dy) = value
            .split_once(',')
            .with_context(|| format!("look step {token:?} needs <dx>,<dy>"))?;
        return Ok(Step::Look {
            dx: dx.parse().with_context(|| format!("bad dx in {token:?}"))?,
            dy: dy.parse().with_context(|| format!("bad dy in {token:?}"))?,
        });
    }

    let seconds: f32 = value
        .parse()
        .with_context(|| format!("bad duration in {token:?}"))?;
    if !(seconds >= 0.0) {
        bail!("duration in {token:?} must be non-negative");
    }
    Ok(Step::Move {
        direction: name.to_string(),
        seconds,
    })
}

pub fn run(camera: &mut Camera, steps: &[Step]) {
    for step in steps {
        match step {
            Step::Move { direction, seconds } => {
                camera.process_keyboard_token(direction, *seconds)
            }
            Step::Look { dx, dy } => camera.process_mouse_movement(*dx, *dy),
        }
        tracing::debug!(?step, position = ?camera.position(), "step applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_camera::CameraMovement;

    #[test]
    fn parses_moves_and_looks() {
        let steps = parse("forward=0.5  look=10,-5\nLEFT=1").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Move {
                    direction: "forward".into(),
                    seconds: 0.5
                },
                Step::Look { dx: 10.0, dy: -5.0 },
                Step::Move {
                    direction: "LEFT".into(),
                    seconds: 1.0
                },
            ]
        );
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(parse("forward").is_err());
        assert!(parse("forward=fast").is_err());
        assert!(parse("look=10").is_err());
        assert!(parse("look=a,b").is_err());
        assert!(parse("back=-1").is_err());
    }

    #[test]
    fn run_matches_direct_calls() {
        let steps = parse("forward=0.5 look=100,20 right=0.25").unwrap();
        let mut scripted = Camera::default();
        run(&mut scripted, &steps);

        let mut direct = Camera::default();
        direct.process_keyboard(CameraMovement::Forward, 0.5);
        direct.process_mouse_movement(100.0, 20.0);
        direct.process_keyboard(CameraMovement::Right, 0.25);
        assert_eq!(scripted, direct);
    }

    #[test]
    fn unknown_direction_is_skipped() {
        let steps = parse("sideways=3").unwrap();
        let mut cam = Camera::default();
        run(&mut cam, &steps);
        assert_eq!(cam, Camera::default());
    }
}
