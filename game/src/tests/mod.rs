#[cfg(test)]
mod test_cells;
