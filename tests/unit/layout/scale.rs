use super::*;
use crate::{PhysicalRectangle, ScreenRectangle, Viewport};

fn single(screen_w: f64, screen_h: f64) -> Layout {
    let mut layout = Layout::new();
    let id = layout.add_viewport(Viewport::new(
        PhysicalRectangle::from_size(1000.0, 500.0),
        ScreenRectangle::from_size(screen_w, screen_h),
    ));
    layout.set_reference(id).unwrap();
    layout
}

#[test]
fn max_scale_fits_matching_aspect_exactly() {
    let layout = single(1000.0, 500.0);
    assert_eq!(layout.max_scale(ImageSize::new(2000, 1000)).unwrap(), 2.0);
    assert_eq!(
        layout
            .resolve_scale_for(ScaleMode::Max, Some(ImageSize::new(2000, 1000)))
            .unwrap(),
        2.0
    );
}

#[test]
fn max_scale_picks_the_limiting_axis() {
    let layout = single(1000.0, 500.0);
    // Wider image: height limits.
    assert_eq!(layout.max_scale(ImageSize::new(3000, 1000)).unwrap(), 2.0);
    // Taller image: width limits.
    assert_eq!(layout.max_scale(ImageSize::new(2000, 3000)).unwrap(), 2.0);
    assert_eq!(layout.max_scale(ImageSize::new(0, 0)).unwrap(), 0.0);
}

#[test]
fn max_scale_needs_a_nonzero_extent() {
    let mut layout = Layout::new();
    assert_eq!(
        layout.max_scale(ImageSize::new(10, 10)),
        Err(ViewportsError::EmptyLayout)
    );
    layout.add_viewport(Viewport::new(
        PhysicalRectangle::new(0.0, 0.0, 100.0, 0.0),
        ScreenRectangle::from_size(10.0, 10.0),
    ));
    assert!(matches!(
        layout.max_scale(ImageSize::new(10, 10)),
        Err(ViewportsError::DivisionByZero(_))
    ));
}

#[test]
fn auto_takes_highest_resolution_and_clamps() {
    let image = Some(ImageSize::new(2000, 1000));
    assert_eq!(
        single(1000.0, 500.0)
            .resolve_scale_for(ScaleMode::Auto, image)
            .unwrap(),
        1.0
    );
    assert_eq!(
        single(4000.0, 2000.0)
            .resolve_scale_for(ScaleMode::Auto, image)
            .unwrap(),
        2.0
    );

    let mut layout = single(1000.0, 500.0);
    layout.add_viewport(Viewport::new(
        PhysicalRectangle::new(1000.0, 0.0, 1100.0, 50.0),
        ScreenRectangle::from_size(150.0, 75.0),
    ));
    // Extent is 1100x500, so 2000x1000 allows 1.818..; best resolution is 1.5.
    assert_eq!(layout.resolve_scale_for(ScaleMode::Auto, image).unwrap(), 1.5);
}

#[test]
fn empty_image_is_too_small_for_every_implicit_mode() {
    let mut layout = single(1000.0, 500.0);
    layout.attach_source(&ImageSize::new(0, 0));
    for mode in [ScaleMode::Auto, ScaleMode::Max, ScaleMode::Reference] {
        assert_eq!(
            layout.plan(mode).unwrap_err(),
            ViewportsError::ImageTooSmall {
                required: 1.0,
                max: 0.0,
            },
            "{mode}"
        );
    }
}

#[test]
fn zero_width_screen_never_resolves_to_zero() {
    let mut layout = Layout::new();
    let id = layout.add_viewport(Viewport::new(
        PhysicalRectangle::from_size(100.0, 100.0),
        ScreenRectangle::from_geometry("0x0+0+0").unwrap(),
    ));
    layout.set_reference(id).unwrap();
    layout.attach_source(&ImageSize::new(1000, 1000));

    for mode in [ScaleMode::Auto, ScaleMode::Reference] {
        assert_eq!(
            layout.resolve_scale(mode),
            Err(ViewportsError::InvalidScale(0.0))
        );
    }

    // Max only looks at the physical extent.
    let plan = layout.plan(ScaleMode::Max).unwrap();
    assert_eq!(plan.scale, 10.0);
    assert_eq!(plan.cuts[0].geometry, "1000x1000+0+0");
}

#[test]
fn reference_mode_never_clamps() {
    let layout = single(4000.0, 2000.0);
    let err = layout
        .resolve_scale_for(ScaleMode::Reference, Some(ImageSize::new(100, 100)))
        .unwrap_err();
    assert_eq!(
        err,
        ViewportsError::ImageTooSmall {
            required: 4.0,
            max: 0.1,
        }
    );

    assert_eq!(
        layout
            .resolve_scale_for(ScaleMode::Reference, Some(ImageSize::new(4000, 2000)))
            .unwrap(),
        4.0
    );
}

#[test]
fn reference_mode_needs_a_reference() {
    let mut layout = Layout::new();
    layout.add_viewport(Viewport::new(
        PhysicalRectangle::from_size(10.0, 10.0),
        ScreenRectangle::from_size(10.0, 10.0),
    ));
    assert_eq!(
        layout.resolve_scale_for(ScaleMode::Reference, Some(ImageSize::new(10, 10))),
        Err(ViewportsError::MissingReference)
    );
}

#[test]
fn explicit_scale_is_validated() {
    let layout = single(1000.0, 500.0);
    let image = Some(ImageSize::new(2000, 1000));
    assert_eq!(
        layout.resolve_scale_for(ScaleMode::Explicit(1.5), image).unwrap(),
        1.5
    );
    assert_eq!(
        layout.resolve_scale_for(ScaleMode::Explicit(2.0), image).unwrap(),
        2.0
    );
    assert_eq!(
        layout.resolve_scale_for(ScaleMode::Explicit(2.5), image),
        Err(ViewportsError::ImageTooSmall {
            required: 2.5,
            max: 2.0,
        })
    );
    for bad in [0.0, -2.0, f64::INFINITY] {
        assert_eq!(
            layout.resolve_scale_for(ScaleMode::Explicit(bad), image),
            Err(ViewportsError::InvalidScale(bad))
        );
    }
    assert!(matches!(
        layout.resolve_scale_for(ScaleMode::Explicit(f64::NAN), None),
        Err(ViewportsError::InvalidScale(_))
    ));
    // Without a source there is no upper bound.
    assert_eq!(
        layout.resolve_scale_for(ScaleMode::Explicit(50.0), None).unwrap(),
        50.0
    );
}

#[test]
fn implicit_modes_need_a_source() {
    let layout = single(1000.0, 500.0);
    for mode in [ScaleMode::Auto, ScaleMode::Max, ScaleMode::Reference] {
        assert_eq!(
            layout.resolve_scale(mode),
            Err(ViewportsError::MissingSource)
        );
    }
}

#[test]
fn resolve_scale_uses_attached_source() {
    let mut layout = single(1000.0, 500.0);
    layout.attach_source(&ImageSize::new(2000, 1000));
    assert_eq!(layout.resolve_scale(ScaleMode::Max).unwrap(), 2.0);
}

#[test]
fn scale_mode_parses_keywords_and_numbers() {
    assert_eq!("auto".parse::<ScaleMode>().unwrap(), ScaleMode::Auto);
    assert_eq!(" MAX ".parse::<ScaleMode>().unwrap(), ScaleMode::Max);
    assert_eq!("ref".parse::<ScaleMode>().unwrap(), ScaleMode::Reference);
    assert_eq!(
        "reference".parse::<ScaleMode>().unwrap(),
        ScaleMode::Reference
    );
    assert_eq!(
        "3.78".parse::<ScaleMode>().unwrap(),
        ScaleMode::Explicit(3.78)
    );
    assert!(matches!(
        "bigger".parse::<ScaleMode>(),
        Err(ViewportsError::Validation(_))
    ));
    assert_eq!(ScaleMode::Explicit(2.5).to_string(), "2.5");
    assert_eq!(ScaleMode::Reference.to_string(), "reference");
}

#[test]
fn scale_to_reference_sets_relative_scales() {
    let mut layout = single(1000.0, 500.0);
    layout.add_viewport(Viewport::new(
        PhysicalRectangle::new(1000.0, 0.0, 1500.0, 250.0),
        ScreenRectangle::from_size(1000.0, 500.0),
    ));
    layout.scale_to_reference().unwrap();
    let scales: Vec<f64> = layout.viewports().iter().map(Viewport::scale).collect();
    assert_eq!(scales, vec![1.0, 2.0]);
}

#[test]
fn scale_to_reference_is_all_or_nothing() {
    let mut layout = single(1000.0, 500.0);
    layout.add_viewport(Viewport::new(
        PhysicalRectangle::new(5.0, 0.0, 5.0, 10.0),
        ScreenRectangle::from_size(10.0, 10.0),
    ));
    assert!(matches!(
        layout.scale_to_reference(),
        Err(ViewportsError::DivisionByZero(_))
    ));
    assert!(layout.viewports().iter().all(|v| v.scale() == 1.0));

    let mut no_ref = Layout::new();
    assert_eq!(
        no_ref.scale_to_reference(),
        Err(ViewportsError::MissingReference)
    );
}
