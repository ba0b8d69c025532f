// Wind pressure:
quantity!(PoundsPerSquareFoot, "lb/ft²", 3);

// Fiber strength of the pole material:
quantity!(PoundsPerSquareInch, "psi", 0);
