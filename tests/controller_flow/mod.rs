mod camera;
mod selection_and_editing;
mod support;
