mod test_basis;
