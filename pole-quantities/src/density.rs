quantity!(PoundsPerCubicFoot, "lb/ft³", 1);
