use super::*;

fn left() -> Viewport {
    Viewport::new(
        PhysicalRectangle::new(0.0, 0.0, 301.0, 376.0),
        ScreenRectangle::from_geometry("1024x1280+0+0").unwrap(),
    )
}

fn main_display() -> Viewport {
    Viewport::named(
        "Main",
        PhysicalRectangle::new(387.0, 0.0, 597.0 + 387.0, 336.0),
        ScreenRectangle::from_geometry("2560x1440+1024+0").unwrap(),
    )
}

#[test]
fn name_defaults_to_screen_geometry() {
    let v = left();
    assert_eq!(v.name(), "1024x1280+0+0");
    assert_eq!(v.scale(), 1.0);
    assert_eq!(main_display().name(), "Main");
}

#[test]
fn resolution_is_pixels_per_physical_unit() {
    let v = Viewport::new(
        PhysicalRectangle::from_size(500.0, 300.0),
        ScreenRectangle::from_size(1000.0, 600.0),
    );
    assert_eq!(v.resolution().unwrap(), 2.0);
    assert_eq!(v.dpi().unwrap(), 2.0 * 25.4);
}

#[test]
fn zero_physical_width_is_division_by_zero() {
    let v = Viewport::new(
        PhysicalRectangle::new(10.0, 0.0, 10.0, 300.0),
        ScreenRectangle::from_size(1000.0, 600.0),
    );
    assert!(matches!(
        v.resolution(),
        Err(ViewportsError::DivisionByZero(_))
    ));
    assert!(matches!(v.dpi(), Err(ViewportsError::DivisionByZero(_))));
}

#[test]
fn scale_to_is_ratio_of_resolutions() {
    let mut a = Viewport::new(
        PhysicalRectangle::from_size(500.0, 300.0),
        ScreenRectangle::from_size(1000.0, 600.0),
    );
    let b = Viewport::new(
        PhysicalRectangle::from_size(500.0, 300.0),
        ScreenRectangle::from_size(500.0, 300.0),
    );
    a.scale_to(&b).unwrap();
    assert_eq!(a.scale(), 2.0);

    let mut b = b;
    b.scale_to(&a).unwrap();
    assert_eq!(b.scale(), 0.5);
}

#[test]
fn scale_to_zero_resolution_fails_and_keeps_scale() {
    let mut a = left();
    let blank = Viewport::new(
        PhysicalRectangle::from_size(100.0, 100.0),
        ScreenRectangle::from_size(0.0, 0.0),
    );
    assert!(matches!(
        a.scale_to(&blank),
        Err(ViewportsError::DivisionByZero(_))
    ));
    assert_eq!(a.scale(), 1.0);
}
