use seabattle::{Coordinate, Orientation, Ship};

#[test]
fn test_horizontal_coords() {
    let ship = Ship::new(Coordinate::new(1, 2), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.coords().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
            Coordinate::new(3, 2)
        ]
    );
    assert_eq!(ship.nose(), Coordinate::new(1, 2));
    assert_eq!(ship.health(), 3);
    assert!(ship.is_alive());
}

#[test]
fn test_vertical_coords_and_contains() {
    let ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Vertical);
    let cells: Vec<_> = ship.coords().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
    for c in cells {
        assert!(ship.contains(c));
    }
    assert!(!ship.contains(Coordinate::new(1, 0)));
    assert!(!ship.contains(Coordinate::new(0, 2)));
}

#[test]
fn test_contour_covers_surrounding_rectangle() {
    let ship = Ship::new(Coordinate::new(2, 2), 3, Orientation::Vertical);
    let contour: Vec<_> = ship.contour().collect();
    // 3 columns by 5 rows
    assert_eq!(contour.len(), 15);
    for x in 1..=3 {
        for y in 1..=5 {
            assert!(contour.contains(&Coordinate::new(x, y)), "missing ({}, {})", x, y);
        }
    }
    assert!(!contour.contains(&Coordinate::new(4, 2)));
    assert!(!contour.contains(&Coordinate::new(2, 6)));
}

#[test]
fn test_single_cell_contour() {
    let ship = Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal);
    let contour: Vec<_> = ship.contour().collect();
    assert_eq!(contour.len(), 9);
    assert!(contour.contains(&Coordinate::new(-1, -1)));
    assert!(contour.contains(&Coordinate::new(1, 1)));
}
