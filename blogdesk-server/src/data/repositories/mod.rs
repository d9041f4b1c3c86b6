pub(crate) mod in_memory;
