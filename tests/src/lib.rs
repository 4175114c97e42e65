mod lookup;
mod payload;
