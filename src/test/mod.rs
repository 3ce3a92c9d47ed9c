mod test_generate;
