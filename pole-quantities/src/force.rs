quantity!(Pounds, "lb", 0);
