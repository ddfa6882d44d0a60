#![no_main]

use libfuzzer_sys::fuzz_target;

use maze_search::maze::Cell;
use maze_search::maze::Maze;

fuzz_target!(|data: &str| {
    let Ok(mut maze) = Maze::try_from(data) else {
        return;
    };
    let walls = maze.render().matches('*').count();

    let found = maze.find_path().unwrap();
    if found {
        assert!(!maze.path_cells().is_empty());
    }

    maze.reset();
    let rendered = maze.render();
    assert!(!rendered.contains(&Cell::PathToken.to_string()));
    assert!(!rendered.contains(&Cell::TriedToken.to_string()));
    // Only a walled start gets overwritten, so at most one wall is lost.
    assert!(rendered.matches('*').count() + 1 >= walls);
});
