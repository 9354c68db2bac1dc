//! Tests for the dense table model contract
use std::sync::{Arc, Mutex};
use tile_grid::{GridError, GridEvent, TableModel, TileGridModel, DEFAULT_TILE_VALUE};

fn capture_events(model: &mut TileGridModel) -> Arc<Mutex<Vec<GridEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    model.add_event_listener(move |event| {
        if let Ok(mut seen) = sink.lock() {
            seen.push(event.clone());
        }
    });
    events
}

#[test]
fn test_construction_fills_every_cell() {
    let model = TileGridModel::new(2, 3);
    assert_eq!(model.row_count(), 2);
    assert_eq!(model.column_count(), 3);
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(model.value_at(row, col), Ok(DEFAULT_TILE_VALUE));
        }
    }
}

#[test]
fn test_set_then_get() {
    let mut model = TileGridModel::new(3, 3);
    assert_eq!(model.set_value_at(1, 2, 64), Ok(true));
    assert_eq!(model.value_at(1, 2), Ok(64));
    // Neighbours untouched
    assert_eq!(model.value_at(1, 1), Ok(DEFAULT_TILE_VALUE));
}

#[test]
fn test_redundant_write_is_silent() {
    let mut model = TileGridModel::new(1, 1);
    let events = capture_events(&mut model);

    assert_eq!(model.set_value_at(0, 0, 5), Ok(true));
    assert_eq!(model.value_at(0, 0), Ok(5));
    assert_eq!(model.set_value_at(0, 0, 5), Ok(false));
    assert_eq!(model.value_at(0, 0), Ok(5));

    let seen = events.lock().unwrap();
    assert_eq!(
        *seen,
        vec![GridEvent::CellChanged {
            row: 0,
            col: 0,
            value: 5
        }]
    );
}

#[test]
fn test_write_emits_one_scoped_event() {
    let mut model = TileGridModel::new(4, 4);
    let events = capture_events(&mut model);

    assert_eq!(model.set_value_at(2, 3, 8), Ok(true));

    let seen = events.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        GridEvent::CellChanged {
            row: 2,
            col: 3,
            value: 8
        }
    );
}

#[test]
fn test_tile_observer_fires_through_model_write() {
    let mut model = TileGridModel::new(1, 1);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    model
        .tile_mut(0, 0)
        .unwrap()
        .on_value_changed(move |value| {
            if let Ok(mut values) = sink.lock() {
                values.push(value);
            }
        });

    model.set_value_at(0, 0, 32).unwrap();
    model.set_value_at(0, 0, 32).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![32]);
}

#[test]
fn test_out_of_range_coordinates() {
    let mut model = TileGridModel::new(1, 1);
    let err = GridError::InvalidCoordinates {
        row: 0,
        col: 5,
        rows: 1,
        cols: 1,
    };

    assert_eq!(model.value_at(0, 5), Err(err.clone()));
    assert_eq!(model.set_value_at(0, 5, 9), Err(err.clone()));
    assert_eq!(model.is_editable(0, 5), Err(err));
    assert!(model.value_at(7, 0).is_err());
}

#[test]
fn test_every_valid_cell_is_editable() {
    let model = TileGridModel::new(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            assert_eq!(model.is_editable(row, col), Ok(true));
        }
    }
}

#[test]
fn test_counts_invariant_across_writes() {
    let mut model = TileGridModel::new(2, 3);
    for value in [1, 2, 3, 99] {
        model.set_value_at(0, 0, value).unwrap();
        model.set_value_at(1, 2, value + 1).unwrap();
        assert_eq!(model.row_count(), 2);
        assert_eq!(model.column_count(), 3);
    }
}

#[test]
fn test_zero_dimension_grid() {
    let model = TileGridModel::new(0, 3);
    assert_eq!(model.row_count(), 0);
    assert_eq!(model.column_count(), 3);
    assert!(model.value_at(0, 0).is_err());

    let empty = TileGridModel::new(0, 0);
    assert!(empty.is_editable(0, 0).is_err());
}
