//! Instructions text shown at the start of a session

pub const INSTRUCTIONS: &str = "\
Welcome to 'Hunt the Wumpus'
  The wumpus lives in a cave of 20 rooms. each room
has 3 tunnels leading to other rooms. (Look at a
dodecahedron to see how this works-if you don't know
what a dodecahedron is, ask someone)

     Hazards:
 Bottomless pits - Two rooms have bottomless pits in them
     if you go there, you fall into the pit (& lose!)
 Super bats - Two other rooms have super bats. If you
     go there, a bat grabs you and takes you to some other
     room at random. (Which might be troublesome)

     Wumpus:
 The wumpus is not bothered by the hazards (he has sucker
 feet and is too big for a bat to lift).  Usually
 he is asleep. Two things wake him up: your entering
 his room or your shooting an arrow.
     If the wumpus wakes, he moves (p=.75) one room
 or stays still (p=.25). After that, if he is where you
 are, he eats you up (& you lose!)

     You:
 Each turn you may move or shoot a crooked arrow
   moving: you can go one room (thru one tunnel)
   arrows: you have 5 arrows. You lose when you run out.
   each arrow can go from 1 to 5 rooms. You aim by telling
   the computer the room#s you want the arrow to go to.
   If the arrow can't go that way (ie no tunnel) it moves
   at random to the next room.
     If the arrow hits the wumpus, you win.
     If the arrow hits you, you lose.

    Warnings:
     When you are one room away from wumpus or hazard,
    the computer says:
 Wumpus -  'I smell a wumpus'
 Bat    -  'Bats nearby'
 Pit    -  'I feel a draft'
";
