use crate::blendtable::BlendtableMetadata;

// Helper function to create the flattened cells of a width x width table, counting up from 0
pub fn create_cells(width: usize) -> Vec<u32> {
    (0..width * width)
        .map(|cell| u32::try_from(cell).unwrap())
        .collect()
}

// Helper function to create a definition with a table of the given width and one
// pattern per id, named after the id
pub fn create_metadata(width: usize, pattern_ids: &[u32]) -> BlendtableMetadata<u32> {
    let mut metadata = BlendtableMetadata::new("terrain/blend", "blend.bltable");
    metadata.set_table(create_cells(width)).unwrap();
    for &id in pattern_ids {
        metadata.add_pattern(id, format!("pattern{id}.png"));
    }
    metadata
}

// Helper function to split a rendered definition into the rows between `blendtable [` and `]`
pub fn table_rows(text: &str) -> Vec<&str> {
    text.lines()
        .skip_while(|line| *line != "blendtable [")
        .skip(1)
        .take_while(|line| *line != "]")
        .collect()
}
